//! Sparse feature vectors and linear weights
//!
//! Both types read an absent key as 0.0. A feature the weights have never
//! seen therefore contributes nothing to a dot product.

use std::{collections::HashMap, hash::Hash};

/// Named numeric signals extracted for one `(state, action)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<K: Eq + Hash> {
    values: HashMap<K, f64>,
}

impl<K: Eq + Hash> FeatureVector<K> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the value of `key`, replacing any previous value.
    pub fn insert(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    /// Value of `key`, or 0.0 when absent.
    pub fn get(&self, key: &K) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.values.iter().map(|(key, value)| (key, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Eq + Hash> Default for FeatureVector<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<(K, f64)> for FeatureVector<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Linear weight per feature name; starts empty and grows on first update.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights<K: Eq + Hash> {
    values: HashMap<K, f64>,
}

impl<K: Clone + Eq + Hash> Weights<K> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Weight of `key`, or 0.0 when never updated.
    pub fn get(&self, key: &K) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Σ weight[f] · features[f] over the features present.
    pub fn dot(&self, features: &FeatureVector<K>) -> f64 {
        features
            .iter()
            .map(|(key, value)| self.get(key) * value)
            .sum()
    }

    /// Add `delta` to `key`, creating the entry at 0.0 first if needed.
    pub fn add(&mut self, key: &K, delta: f64) {
        *self.values.entry(key.clone()).or_insert(0.0) += delta;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.values.iter().map(|(key, value)| (key, *value))
    }
}

impl<K: Clone + Eq + Hash> Default for Weights<K> {
    fn default() -> Self {
        Self::new()
    }
}
