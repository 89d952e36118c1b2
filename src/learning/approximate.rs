//! Approximate Q-learning with a linear function of extracted features
//!
//! Q(s,a) = Σ_f w[f] · feature[f](s,a)
//!
//! Each transition moves every active weight by α · error · feature[f], where
//! error = r + γ·V(s') - Q(s,a).

use std::{hash::Hash, marker::PhantomData};

use rand::{SeedableRng, rngs::StdRng};

use super::{
    agent::build_rng,
    features::Weights,
    params::LearningParams,
    policy::{epsilon_greedy, greedy},
};
use crate::ports::{Action, ActionSource, FeatureExtractor, Learner};

/// Q-learning agent whose values are a dot product of weights and features.
#[derive(Debug, Clone)]
pub struct ApproximateQAgent<S, A, L, X>
where
    X: FeatureExtractor<S, A>,
{
    weights: Weights<X::Key>,
    extractor: X,
    params: LearningParams,
    actions: L,
    rng: StdRng,
    _state: PhantomData<fn(&S) -> A>,
}

impl<S, A, L, X> ApproximateQAgent<S, A, L, X>
where
    S: Clone + Eq + Hash,
    A: Action,
    L: ActionSource<S, A>,
    X: FeatureExtractor<S, A>,
{
    pub fn new(actions: L, extractor: X, params: LearningParams) -> Self {
        Self {
            weights: Weights::new(),
            extractor,
            params,
            actions,
            rng: build_rng(None),
            _state: PhantomData,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Use a caller-supplied random source for exploration.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn q_value(&self, state: &S, action: &A) -> f64 {
        self.weights.dot(&self.extractor.features(state, action))
    }

    pub fn value(&self, state: &S) -> f64 {
        let legal = self.actions.legal_actions(state);
        greedy(&legal, |action| self.q_value(state, action)).map_or(0.0, |(_, value)| value)
    }

    pub fn policy(&self, state: &S) -> Option<A> {
        let legal = self.actions.legal_actions(state);
        greedy(&legal, |action| self.q_value(state, action)).map(|(action, _)| action)
    }

    /// ε-greedy action selection
    pub fn action(&mut self, state: &S) -> Option<A> {
        let legal = self.actions.legal_actions(state);
        let (weights, extractor) = (&self.weights, &self.extractor);
        epsilon_greedy(&mut self.rng, self.params.epsilon, &legal, || {
            greedy(&legal, |action| weights.dot(&extractor.features(state, action)))
                .map(|(action, _)| action)
        })
    }

    /// Adjust the weights of every feature active for `(state, action)`.
    pub fn update(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        let features = self.extractor.features(state, action);
        let sample = reward + self.params.gamma * self.value(next_state);
        let error = sample - self.weights.dot(&features);
        for (key, value) in features.iter() {
            self.weights.add(key, self.params.alpha * error * value);
        }
    }

    pub fn weights(&self) -> &Weights<X::Key> {
        &self.weights
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }
}

impl<S, A, L, X> Learner<S, A> for ApproximateQAgent<S, A, L, X>
where
    S: Clone + Eq + Hash,
    A: Action,
    L: ActionSource<S, A>,
    X: FeatureExtractor<S, A>,
{
    fn select_action(&mut self, state: &S) -> Option<A> {
        self.action(state)
    }

    fn observe_transition(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        self.update(state, action, next_state, reward);
    }

    fn q_value(&self, state: &S, action: &A) -> f64 {
        ApproximateQAgent::q_value(self, state, action)
    }

    fn value(&self, state: &S) -> f64 {
        ApproximateQAgent::value(self, state)
    }

    fn policy(&self, state: &S) -> Option<A> {
        ApproximateQAgent::policy(self, state)
    }

    fn params(&self) -> &LearningParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LearningParams {
        &mut self.params
    }

    fn name(&self) -> &str {
        "Approximate Q-Learning"
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
