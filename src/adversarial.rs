//! Adversarial game-tree search
//!
//! Depth-bounded lookahead for agent 0 in a turn-taking game. One ply is a
//! full round through every agent.
//!
//! - [`minimax`]: adversaries minimize agent 0's value
//! - [`alpha_beta`]: minimax with alpha-beta pruning (same decisions)
//! - [`expectimax`]: adversaries choose uniformly at random
//! - [`reflex`]: one-step lookahead with random tie-breaking
//!
//! The stop action is never searched for agent 0. Root ties go to the first
//! action in legal-action order.

pub mod alpha_beta;
pub mod expectimax;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod minimax;
pub mod reflex;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use alpha_beta::AlphaBetaAgent;
pub use expectimax::ExpectimaxAgent;
pub use minimax::MinimaxAgent;
pub use reflex::ReflexAgent;

use crate::{
    Error, Result,
    ports::{Action, Evaluation, GameState},
};

/// Lookahead configuration shared by the tree-search agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSearchConfig {
    /// Number of plies searched before applying the evaluation function
    pub depth: usize,
}

impl TreeSearchConfig {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }
}

impl Default for TreeSearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

/// Root decision together with its backed-up value.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    pub action: A,
    pub value: f64,
}

/// Agent that picks agent 0's move by searching the game tree.
pub trait TreeSearchAgent<G: GameState> {
    /// Best root action and its value, or `None` when agent 0 has no
    /// searchable action.
    fn decide_with_value(&self, state: &G) -> Option<Decision<G::Action>>;

    fn decide(&self, state: &G) -> Option<G::Action> {
        self.decide_with_value(state).map(|decision| decision.action)
    }
}

/// Whose move it is and how many plies have been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Turn {
    pub agent: usize,
    pub depth: usize,
}

impl Turn {
    /// Turn that follows agent 0's root move.
    pub(crate) fn after_root(num_agents: usize) -> Self {
        Turn { agent: 0, depth: 0 }.next(num_agents)
    }

    /// The last agent's move completes the ply and hands control back to
    /// agent 0.
    pub(crate) fn next(self, num_agents: usize) -> Self {
        let agent = self.agent + 1;
        if agent >= num_agents {
            Turn {
                agent: 0,
                depth: self.depth + 1,
            }
        } else {
            Turn {
                agent,
                depth: self.depth,
            }
        }
    }

    pub(crate) fn is_max(self) -> bool {
        self.agent == 0
    }
}

/// Actions searched for `agent`: all legal actions, minus the stop action
/// for agent 0.
pub(crate) fn branching_actions<G: GameState>(state: &G, agent: usize) -> Vec<G::Action> {
    let mut actions = state.legal_actions(agent);
    if agent == 0 {
        actions.retain(|action| !action.is_stop());
    }
    actions
}

/// Evaluate every root action with `child_value` and keep the first best.
///
/// `child_value` receives the successor state and the best value found so
/// far (negative infinity before the first child).
pub(crate) fn root_decision<G, F>(state: &G, mut child_value: F) -> Option<Decision<G::Action>>
where
    G: GameState,
    F: FnMut(&G, f64) -> f64,
{
    let mut best: Option<Decision<G::Action>> = None;
    for action in branching_actions(state, 0) {
        let floor = best.as_ref().map_or(f64::NEG_INFINITY, |d| d.value);
        let value = child_value(&state.successor(0, &action), floor);
        if best.is_none() || value > floor {
            best = Some(Decision { action, value });
        }
    }
    best
}

/// Tree-search agent selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeAgentKind {
    Minimax,
    AlphaBeta,
    Expectimax,
    /// Tournament agent; recognised but not implemented.
    Contest,
}

impl TreeAgentKind {
    /// Build the agent with the given leaf evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotImplemented`] for [`TreeAgentKind::Contest`].
    pub fn build<G, E>(
        self,
        evaluation: E,
        config: TreeSearchConfig,
    ) -> Result<Box<dyn TreeSearchAgent<G>>>
    where
        G: GameState + 'static,
        E: Evaluation<G> + 'static,
    {
        match self {
            TreeAgentKind::Minimax => Ok(Box::new(MinimaxAgent::new(evaluation, config))),
            TreeAgentKind::AlphaBeta => Ok(Box::new(AlphaBetaAgent::new(evaluation, config))),
            TreeAgentKind::Expectimax => Ok(Box::new(ExpectimaxAgent::new(evaluation, config))),
            TreeAgentKind::Contest => Err(Error::NotImplemented {
                variant: "contest agent".to_string(),
            }),
        }
    }
}

impl fmt::Display for TreeAgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TreeAgentKind::Minimax => "minimax",
            TreeAgentKind::AlphaBeta => "alpha-beta",
            TreeAgentKind::Expectimax => "expectimax",
            TreeAgentKind::Contest => "contest",
        };
        f.write_str(label)
    }
}

impl FromStr for TreeAgentKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(TreeAgentKind::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(TreeAgentKind::AlphaBeta),
            "expectimax" => Ok(TreeAgentKind::Expectimax),
            "contest" => Ok(TreeAgentKind::Contest),
            _ => Err(Error::ParseAlgorithm {
                input: s.to_string(),
                expected: "minimax, alpha-beta, expectimax, contest".to_string(),
            }),
        }
    }
}
