//! Graph search over an implicit state space
//!
//! - [`frontier`]: stack, queue and priority-queue frontiers
//! - [`uninformed`]: depth-first and breadth-first search
//! - [`informed`]: uniform-cost and A* search
//!
//! Every search returns a [`SearchOutcome`], which separates "the start state
//! is already a goal" (an empty plan) from "no goal is reachable" (no plan).

pub mod frontier;
pub mod informed;
pub mod uninformed;

use std::{collections::HashMap, fmt, hash::Hash, str::FromStr};

pub use frontier::{Frontier, PriorityQueue, Queue, Stack};
pub use informed::{a_star_search, uniform_cost_search};
pub use uninformed::{breadth_first_search, depth_first_search};

use crate::ports::{Heuristic, SearchProblem};

/// Result of one search invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<A> {
    plan: Option<Vec<A>>,
    expanded: usize,
}

impl<A> SearchOutcome<A> {
    pub(crate) fn found(actions: Vec<A>, expanded: usize) -> Self {
        Self {
            plan: Some(actions),
            expanded,
        }
    }

    pub(crate) fn unreachable(expanded: usize) -> Self {
        Self {
            plan: None,
            expanded,
        }
    }

    /// Actions from the start state to a goal, or `None` if no goal is
    /// reachable. An empty slice means the start state is a goal.
    pub fn plan(&self) -> Option<&[A]> {
        self.plan.as_deref()
    }

    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }

    /// Number of states popped from the frontier and goal-tested.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The plan as a plain action list; empty when no goal is reachable.
    pub fn into_actions(self) -> Vec<A> {
        self.plan.unwrap_or_default()
    }
}

/// Back-pointers from each discovered state to the edge that reached it.
///
/// The start state never has an entry, which terminates path reconstruction.
pub(crate) struct ParentMap<S, A> {
    links: HashMap<S, (S, A)>,
}

impl<S: Clone + Eq + Hash, A: Clone> ParentMap<S, A> {
    pub(crate) fn new() -> Self {
        Self {
            links: HashMap::new(),
        }
    }

    /// Record the first edge into `child`; later calls for the same child are
    /// ignored.
    pub(crate) fn record(&mut self, child: S, parent: S, action: A) {
        self.links.entry(child).or_insert((parent, action));
    }

    /// Actions leading from the start state to `goal`, in order.
    pub(crate) fn path_to(&self, goal: &S) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = goal;
        while let Some((parent, action)) = self.links.get(current) {
            actions.push(action.clone());
            current = parent;
        }
        actions.reverse();
        actions
    }
}

/// Search strategy selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl SearchAlgorithm {
    /// Run this strategy. Only A* consults `heuristic`.
    pub fn run<P, H>(self, problem: &P, heuristic: &H) -> SearchOutcome<P::Action>
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        match self {
            SearchAlgorithm::DepthFirst => depth_first_search(problem),
            SearchAlgorithm::BreadthFirst => breadth_first_search(problem),
            SearchAlgorithm::UniformCost => uniform_cost_search(problem),
            SearchAlgorithm::AStar => a_star_search(problem, heuristic),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchAlgorithm::DepthFirst => "dfs",
            SearchAlgorithm::BreadthFirst => "bfs",
            SearchAlgorithm::UniformCost => "ucs",
            SearchAlgorithm::AStar => "astar",
        };
        f.write_str(label)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(SearchAlgorithm::DepthFirst),
            "bfs" | "breadth-first" => Ok(SearchAlgorithm::BreadthFirst),
            "ucs" | "uniform-cost" => Ok(SearchAlgorithm::UniformCost),
            "astar" | "a*" | "a-star" => Ok(SearchAlgorithm::AStar),
            _ => Err(crate::Error::ParseAlgorithm {
                input: s.to_string(),
                expected: "dfs, bfs, ucs, astar".to_string(),
            }),
        }
    }
}
