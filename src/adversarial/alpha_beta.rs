//! Minimax with alpha-beta pruning
//!
//! Bounds are passed down by value, so sibling branches never share state.
//! Pruning only skips work; decisions and root values match [`super::MinimaxAgent`].

use super::{Decision, TreeSearchAgent, TreeSearchConfig, Turn, branching_actions, root_decision};
use crate::ports::{Evaluation, GameState};

/// Alpha-beta agent: minimax decisions with fewer node visits.
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent<E> {
    evaluation: E,
    config: TreeSearchConfig,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(evaluation: E, config: TreeSearchConfig) -> Self {
        Self { evaluation, config }
    }

    pub fn with_depth(evaluation: E, depth: usize) -> Self {
        Self::new(evaluation, TreeSearchConfig::new(depth))
    }

    pub fn config(&self) -> &TreeSearchConfig {
        &self.config
    }

    /// Value of `state` within the window `(alpha, beta)`.
    ///
    /// A MAX node returns as soon as a child reaches `beta`; a MIN node
    /// returns as soon as a child drops to `alpha`.
    fn value<G>(&self, state: &G, turn: Turn, mut alpha: f64, mut beta: f64) -> f64
    where
        G: GameState,
        E: Evaluation<G>,
    {
        let actions = branching_actions(state, turn.agent);
        if turn.depth >= self.config.depth || actions.is_empty() {
            return self.evaluation.evaluate(state);
        }

        let next = turn.next(state.num_agents());
        if turn.is_max() {
            let mut best = f64::NEG_INFINITY;
            for action in &actions {
                let child = state.successor(turn.agent, action);
                best = best.max(self.value(&child, next, alpha, beta));
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for action in &actions {
                let child = state.successor(turn.agent, action);
                best = best.min(self.value(&child, next, alpha, beta));
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

impl<G, E> TreeSearchAgent<G> for AlphaBetaAgent<E>
where
    G: GameState,
    E: Evaluation<G>,
{
    fn decide_with_value(&self, state: &G) -> Option<Decision<G::Action>> {
        let turn = Turn::after_root(state.num_agents());
        // The best root value so far is a valid lower bound for later siblings.
        root_decision(state, |child, alpha| {
            self.value(child, turn, alpha, f64::INFINITY)
        })
    }
}
