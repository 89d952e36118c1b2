//! Learner port - abstraction over reinforcement learning agents
//!
//! The episode pipeline talks to agents only through this trait, so tabular
//! and feature-based Q-learning are interchangeable.

use crate::learning::LearningParams;

/// Learner trait - unified interface for Q-value based agents
///
/// Action selection only reads learned values. The single write path is
/// [`Learner::observe_transition`], which the environment loop calls after
/// every step.
///
/// # Examples
///
/// ```no_run
/// use pacai::{ports::Learner, grid::{Cell, Direction}};
///
/// fn greedy_walk<L: Learner<Cell, Direction>>(agent: &L, start: Cell) -> Option<Direction> {
///     agent.policy(&start)
/// }
/// ```
pub trait Learner<S, A> {
    /// Epsilon-greedy action for `state`, or `None` when `state` is terminal.
    fn select_action(&mut self, state: &S) -> Option<A>;

    /// Record a `(state, action, next_state, reward)` transition and update
    /// the learned values.
    fn observe_transition(&mut self, state: &S, action: &A, next_state: &S, reward: f64);

    /// Current estimate of `Q(state, action)`; 0.0 when never seen.
    fn q_value(&self, state: &S, action: &A) -> f64;

    /// `max_a Q(state, a)` over legal actions, or 0.0 for a terminal state.
    fn value(&self, state: &S) -> f64;

    /// Greedy action for `state`, or `None` for a terminal state.
    fn policy(&self, state: &S) -> Option<A>;

    fn params(&self) -> &LearningParams;

    /// Mutable access used by the pipeline to stop exploring and learning
    /// once training episodes are over.
    fn params_mut(&mut self) -> &mut LearningParams;

    /// Get the learner's name.
    fn name(&self) -> &str;

    /// Seed the learner's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for learners without randomness.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
