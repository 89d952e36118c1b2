//! Q-table: explicit action values for tabular Q-learning

use std::{collections::HashMap, hash::Hash};

/// Q-table mapping `(state, action)` pairs to Q-values
///
/// Absent entries read as 0.0. Entries are only ever written by
/// [`QTable::blend`] and never removed.
#[derive(Debug, Clone)]
pub struct QTable<S, A> {
    q_values: HashMap<(S, A), f64>,
}

impl<S, A> QTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            q_values: HashMap::new(),
        }
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: &S, action: &A) -> f64 {
        // Keys are owned pairs, so a lookup needs owned copies.
        self.q_values
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Move `Q(s, a)` toward `sample` with step size `alpha`:
    ///
    /// Q(s,a) ← (1 - α)·Q(s,a) + α·sample
    pub fn blend(&mut self, state: &S, action: &A, sample: f64, alpha: f64) {
        let entry = self
            .q_values
            .entry((state.clone(), action.clone()))
            .or_insert(0.0);
        *entry = (1.0 - alpha) * *entry + alpha * sample;
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, f64)> {
        self.q_values
            .iter()
            .map(|((state, action), value)| (state, action, *value))
    }
}

impl<S, A> Default for QTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
