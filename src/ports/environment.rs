//! Environment port - the world a reinforcement learner acts in

use crate::ports::problem::Action;

/// Supplies the legal actions of a state to a learning agent.
///
/// An empty list marks a terminal state.
pub trait ActionSource<S, A> {
    fn legal_actions(&self, state: &S) -> Vec<A>;
}

impl<S, A, F> ActionSource<S, A> for F
where
    F: Fn(&S) -> Vec<A>,
{
    fn legal_actions(&self, state: &S) -> Vec<A> {
        self(state)
    }
}

/// Observed outcome of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub next_state: S,
    pub reward: f64,
}

/// Episodic environment driven by [`crate::pipeline::EpisodeRunner`].
///
/// `step` takes `&mut self` so stochastic environments can own their random
/// source.
pub trait Environment {
    type State: Clone;
    type Action: Action;

    /// Reset and return the initial state of a new episode.
    fn start_state(&mut self) -> Self::State;

    /// Legal actions in `state`; empty when the episode is over.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` in `state`.
    fn step(&mut self, state: &Self::State, action: &Self::Action) -> Transition<Self::State>;
}
