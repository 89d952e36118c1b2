//! Expectimax search
//!
//! Adversaries are modelled as choosing uniformly at random from their legal
//! actions, so their nodes take the mean of their children.

use super::{Decision, TreeSearchAgent, TreeSearchConfig, Turn, branching_actions, root_decision};
use crate::ports::{Evaluation, GameState};

/// Expectimax agent: agent 0 maximizes, other agents are chance nodes.
#[derive(Debug, Clone)]
pub struct ExpectimaxAgent<E> {
    evaluation: E,
    config: TreeSearchConfig,
}

impl<E> ExpectimaxAgent<E> {
    pub fn new(evaluation: E, config: TreeSearchConfig) -> Self {
        Self { evaluation, config }
    }

    pub fn with_depth(evaluation: E, depth: usize) -> Self {
        Self::new(evaluation, TreeSearchConfig::new(depth))
    }

    pub fn config(&self) -> &TreeSearchConfig {
        &self.config
    }

    fn value<G>(&self, state: &G, turn: Turn) -> f64
    where
        G: GameState,
        E: Evaluation<G>,
    {
        let actions = branching_actions(state, turn.agent);
        if turn.depth >= self.config.depth || actions.is_empty() {
            return self.evaluation.evaluate(state);
        }

        let next = turn.next(state.num_agents());
        let children = actions
            .iter()
            .map(|action| self.value(&state.successor(turn.agent, action), next));
        if turn.is_max() {
            children.fold(f64::NEG_INFINITY, f64::max)
        } else {
            children.sum::<f64>() / actions.len() as f64
        }
    }
}

impl<G, E> TreeSearchAgent<G> for ExpectimaxAgent<E>
where
    G: GameState,
    E: Evaluation<G>,
{
    fn decide_with_value(&self, state: &G) -> Option<Decision<G::Action>> {
        let turn = Turn::after_root(state.num_agents());
        root_decision(state, |child, _| self.value(child, turn))
    }
}
