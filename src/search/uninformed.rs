//! Depth-first and breadth-first graph search

use std::collections::HashSet;

use super::{
    ParentMap, SearchOutcome,
    frontier::{Frontier, Queue, Stack},
};
use crate::ports::{SearchProblem, Successor};

/// Search the deepest nodes in the search tree first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    graph_search(problem, Stack::new())
}

/// Search the shallowest nodes in the search tree first.
///
/// Returns a plan with the fewest actions.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    graph_search(problem, Queue::new())
}

/// Frontier-driven graph search.
///
/// States are marked visited when they are pushed, so no state ever enters
/// the frontier twice. The goal test fires when a state is popped.
fn graph_search<P, F>(problem: &P, mut frontier: F) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    F: Frontier<P::State>,
{
    let start = problem.start_state();
    let mut visited = HashSet::new();
    let mut parents = ParentMap::new();
    visited.insert(start.clone());
    frontier.push(start);

    let mut expanded = 0;
    while let Some(state) = frontier.pop() {
        expanded += 1;
        if problem.is_goal(&state) {
            return SearchOutcome::found(parents.path_to(&state), expanded);
        }

        for Successor {
            state: next, action, ..
        } in problem.successors(&state)
        {
            if visited.insert(next.clone()) {
                parents.record(next.clone(), state.clone(), action);
                frontier.push(next);
            }
        }
    }

    SearchOutcome::unreachable(expanded)
}
