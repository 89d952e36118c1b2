//! Reflex agent: one-step lookahead with an action evaluation

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::ports::{ActionEvaluation, GameState};

/// Chooses among agent 0's best-scoring actions uniformly at random.
///
/// Unlike the tree-search agents it scores every legal action, including the
/// stop action.
#[derive(Debug, Clone)]
pub struct ReflexAgent<E> {
    evaluation: E,
    rng: StdRng,
}

impl<E> ReflexAgent<E> {
    pub fn new(evaluation: E) -> Self {
        Self {
            evaluation,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Best action for agent 0, or `None` when it has no legal actions.
    pub fn decide<G>(&mut self, state: &G) -> Option<G::Action>
    where
        G: GameState,
        E: ActionEvaluation<G>,
    {
        let actions = state.legal_actions(0);
        let scores: Vec<f64> = actions
            .iter()
            .map(|action| self.evaluation.evaluate(state, action))
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<&G::Action> = actions
            .iter()
            .zip(&scores)
            .filter(|(_, score)| **score == best)
            .map(|(action, _)| action)
            .collect();
        candidates.choose(&mut self.rng).map(|action| (*action).clone())
    }
}
