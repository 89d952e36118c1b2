//! Reinforcement learning from observed transitions
//!
//! - [`agent`]: tabular Q-learning over a [`QTable`]
//! - [`approximate`]: Q-learning with a linear function of features
//! - [`params`]: learning rate, exploration rate and discount
//!
//! Both agents act epsilon-greedily and learn only through `update`. A state
//! with no legal actions is terminal: its value is 0.0 and it has no policy.

pub mod agent;
pub mod approximate;
pub mod features;
pub mod params;
mod policy;
pub mod q_table;

pub use agent::QLearningAgent;
pub use approximate::ApproximateQAgent;
pub use features::{FeatureVector, Weights};
pub use params::LearningParams;
pub use q_table::QTable;
