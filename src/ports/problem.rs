//! Search problem port - the implicit graph explored by the search family
//!
//! A problem exposes a start state, a goal test and a successor function.
//! Search code never looks inside a state beyond hashing and equality.

use std::{fmt, hash::Hash};

/// Opaque transition choice.
///
/// One reserved value (the "stop" no-op) can be flagged through
/// [`Action::is_stop`]; adversarial search never branches on it for the
/// maximizing agent.
pub trait Action: Clone + Eq + Hash + fmt::Debug {
    /// Whether this action is the no-op that never progresses the game.
    fn is_stop(&self) -> bool {
        false
    }
}

macro_rules! opaque_action {
    ($($ty:ty),* $(,)?) => {
        $(impl Action for $ty {})*
    };
}

opaque_action!(u8, u16, u32, u64, usize, i32, i64, char, &'static str, String);

/// One edge of the implicit graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// State reached by taking `action`
    pub state: S,
    /// Action taken
    pub action: A,
    /// Incremental step cost (expected to be non-negative)
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Search problem consumed by DFS, BFS, UCS and A*.
///
/// Step costs are not validated; a negative cost is a contract violation by
/// the implementor.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Action;

    /// State the search starts from.
    fn start_state(&self) -> Self::State;

    /// Goal test, evaluated when a state is popped from the frontier.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Finite sequence of `(state, action, cost)` edges leaving `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}

/// Estimated remaining cost from a state to the nearest goal.
///
/// A* only guarantees optimal plans when the estimate is admissible and
/// consistent; neither property is checked.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}

/// Heuristic that always estimates zero; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}
