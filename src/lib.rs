//! Search and learning agents for discrete state spaces
//!
//! This crate provides:
//! - Graph search (depth-first, breadth-first, uniform-cost, A*) over any
//!   [`ports::SearchProblem`]
//! - Adversarial tree search (minimax, alpha-beta, expectimax) over any
//!   [`ports::GameState`]
//! - Tabular and approximate Q-learning driven through an
//!   [`ports::Environment`]
//! - Reference grid worlds and a command-line front end

pub mod adversarial;
pub mod cli;
pub mod error;
pub mod grid;
pub mod learning;
pub mod pipeline;
pub mod ports;
pub mod search;

pub use adversarial::{
    AlphaBetaAgent, Decision, ExpectimaxAgent, MinimaxAgent, ReflexAgent, TreeAgentKind,
    TreeSearchAgent, TreeSearchConfig,
};
pub use error::{Error, Result};
pub use learning::{ApproximateQAgent, LearningParams, QLearningAgent};
pub use search::{SearchAlgorithm, SearchOutcome};
