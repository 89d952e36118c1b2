//! Tabular Q-learning agent
//!
//! Learns action values from observed transitions with the update
//!
//! Q(s,a) ← (1 - α)·Q(s,a) + α·(r + γ·V(s'))
//!
//! where V(s') is the best Q-value among the legal actions of s'.

use std::{hash::Hash, marker::PhantomData};

use rand::{SeedableRng, rngs::StdRng};

use super::{
    params::LearningParams,
    policy::{epsilon_greedy, greedy},
    q_table::QTable,
};
use crate::ports::{Action, ActionSource, Learner};

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control) backed by a [`QTable`].
///
/// `L` supplies the legal actions of a state; an empty list marks a terminal
/// state, whose value is 0.0 and whose policy is `None`.
#[derive(Debug, Clone)]
pub struct QLearningAgent<S, A, L> {
    q_table: QTable<S, A>,
    params: LearningParams,
    actions: L,
    rng: StdRng,
    _state: PhantomData<fn(&S) -> A>,
}

impl<S, A, L> QLearningAgent<S, A, L>
where
    S: Clone + Eq + Hash,
    A: Action,
    L: ActionSource<S, A>,
{
    /// Create a new Q-learning agent
    ///
    /// # Arguments
    ///
    /// * `actions` - Legal-action function of the environment
    /// * `params` - α, ε, γ and the number of training episodes
    pub fn new(actions: L, params: LearningParams) -> Self {
        Self {
            q_table: QTable::new(),
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
        self.q_table.get(state, action)
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
        let q_table = &self.q_table;
        epsilon_greedy(&mut self.rng, self.params.epsilon, &legal, || {
            greedy(&legal, |action| q_table.get(state, action)).map(|(action, _)| action)
        })
    }

    /// Incorporate one observed transition into `Q(state, action)`.
    pub fn update(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        let sample = reward + self.params.gamma * self.value(next_state);
        self.q_table.blend(state, action, sample, self.params.alpha);
    }

    pub fn q_table(&self) -> &QTable<S, A> {
        &self.q_table
    }
}

impl<S, A, L> Learner<S, A> for QLearningAgent<S, A, L>
where
    S: Clone + Eq + Hash,
    A: Action,
    L: ActionSource<S, A>,
{
    fn select_action(&mut self, state: &S) -> Option<A> {
        self.action(state)
    }

    fn observe_transition(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        self.update(state, action, next_state, reward);
    }

    fn q_value(&self, state: &S, action: &A) -> f64 {
        QLearningAgent::q_value(self, state, action)
    }

    fn value(&self, state: &S) -> f64 {
        QLearningAgent::value(self, state)
    }

    fn policy(&self, state: &S) -> Option<A> {
        QLearningAgent::policy(self, state)
    }

    fn params(&self) -> &LearningParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LearningParams {
        &mut self.params
    }

    fn name(&self) -> &str {
        "Q-Learning"
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chain 0 - 1 - 2 where state 2 is terminal.
    fn chain_actions(state: &u8) -> Vec<&'static str> {
        match state {
            2 => Vec::new(),
            _ => vec!["left", "right"],
        }
    }

    type ChainActions = fn(&u8) -> Vec<&'static str>;

    fn agent(params: LearningParams) -> QLearningAgent<u8, &'static str, ChainActions> {
        QLearningAgent::new(chain_actions as ChainActions, params).with_seed(11)
    }

    #[test]
    fn test_unit_alpha_zero_gamma_overwrites_with_reward() {
        let mut agent = agent(LearningParams::new(1.0, 0.0, 0.0));
        agent.update(&0, &"right", &1, 3.5);
        assert_eq!(agent.q_value(&0, &"right"), 3.5);
        agent.update(&0, &"right", &1, -1.25);
        assert_eq!(agent.q_value(&0, &"right"), -1.25);
    }

    #[test]
    fn test_update_bootstraps_from_next_state_value() {
        let mut agent = agent(LearningParams::new(0.5, 0.0, 0.9));
        agent.update(&1, &"right", &2, 10.0);
        // terminal next state contributes nothing: 0.5 * 10
        assert_eq!(agent.q_value(&1, &"right"), 5.0);

        agent.update(&0, &"right", &1, 0.0);
        // 0.5 * (0 + 0.9 * 5)
        assert!((agent.q_value(&0, &"right") - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_state_sentinels() {
        let mut agent = agent(LearningParams::default());
        assert_eq!(agent.value(&2), 0.0);
        assert_eq!(agent.policy(&2), None);
        assert_eq!(agent.action(&2), None);
    }

    #[test]
    fn test_policy_and_value_agree() {
        let mut agent = agent(LearningParams::new(1.0, 0.0, 0.0));
        agent.update(&0, &"left", &0, -1.0);
        assert_eq!(agent.policy(&0), Some("right"));
        assert_eq!(agent.value(&0), 0.0);
        assert_eq!(agent.q_value(&0, &"right"), agent.value(&0));
    }

    #[test]
    fn test_action_reads_without_writing() {
        let mut agent = agent(LearningParams::new(0.5, 1.0, 0.9));
        for _ in 0..20 {
            agent.action(&0);
        }
        assert!(agent.q_table().is_empty());
    }
}
