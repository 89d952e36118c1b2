//! Ports (trait boundaries) for external collaborators.
//!
//! The algorithms in this crate never define concrete states. Problems, games,
//! environments and feature extractors are supplied through these traits.

pub mod environment;
pub mod features;
pub mod game;
pub mod learner;
pub mod observer;
pub mod problem;

pub use environment::{ActionSource, Environment, Transition};
pub use features::{FeatureExtractor, IdentityExtractor};
pub use game::{ActionEvaluation, Evaluation, GameState, ScoreEvaluation, SuccessorScore};
pub use learner::Learner;
pub use observer::{EpisodeSummary, Observer};
pub use problem::{Action, Heuristic, NullHeuristic, SearchProblem, Successor};
