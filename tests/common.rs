//! Common fixtures for the pacai test suite.
//!
//! Explicit weighted graphs for search, explicit game trees for adversarial
//! search, and a chain environment for the learning agents.

#![allow(dead_code)]

use std::{collections::HashMap, rc::Rc};

use pacai::ports::{Environment, GameState, SearchProblem, Successor, Transition};
use rand::{Rng, rngs::StdRng};

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Directed graph with named nodes; the action of an edge is its target.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    start: &'static str,
    goals: Vec<&'static str>,
    edges: HashMap<&'static str, Vec<(&'static str, f64)>>,
}

impl WeightedGraph {
    pub fn new(
        start: &'static str,
        goals: &[&'static str],
        edges: &[(&'static str, &'static str, f64)],
    ) -> Self {
        let mut adjacency: HashMap<&'static str, Vec<(&'static str, f64)>> = HashMap::new();
        for &(from, to, cost) in edges {
            adjacency.entry(from).or_default().push((to, cost));
        }
        Self {
            start,
            goals: goals.to_vec(),
            edges: adjacency,
        }
    }

    /// Walk `plan` from the start; `None` if an action is not an edge.
    pub fn follow(&self, plan: &[&'static str]) -> Option<(&'static str, f64)> {
        let mut state = self.start;
        let mut cost = 0.0;
        for action in plan {
            let &(next, step) = self
                .edges
                .get(state)?
                .iter()
                .find(|(target, _)| target == action)?;
            state = next;
            cost += step;
        }
        Some((state, cost))
    }
}

impl SearchProblem for WeightedGraph {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> &'static str {
        self.start
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &&'static str) -> Vec<Successor<&'static str, &'static str>> {
        self.edges
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&(to, cost)| Successor::new(to, to, cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Cheap direct edge versus a longer but cheaper detour.
///
/// Fewest actions: S -> G (cost 10). Cheapest: S -> A -> B -> G (cost 3).
pub fn detour_graph() -> WeightedGraph {
    WeightedGraph::new(
        "S",
        &["G"],
        &[
            ("S", "G", 10.0),
            ("S", "A", 1.0),
            ("A", "B", 1.0),
            ("B", "G", 1.0),
            ("A", "S", 1.0),
        ],
    )
}

/// Unit-cost graph with a cycle and two routes of different length.
pub fn unit_graph() -> WeightedGraph {
    WeightedGraph::new(
        "S",
        &["G"],
        &[
            ("S", "A", 1.0),
            ("S", "B", 1.0),
            ("A", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "G", 1.0),
            ("B", "E", 1.0),
            ("E", "G", 1.0),
            ("C", "A", 1.0),
            ("E", "S", 1.0),
        ],
    )
}

/// Explicit game tree; children are addressed by index.
pub enum Tree {
    Leaf(f64),
    Node(Vec<Rc<Tree>>),
}

pub fn leaf(value: f64) -> Rc<Tree> {
    Rc::new(Tree::Leaf(value))
}

pub fn node(children: Vec<Rc<Tree>>) -> Rc<Tree> {
    Rc::new(Tree::Node(children))
}

/// Random tree of the given height with integer leaf values in [-20, 20].
pub fn random_tree(rng: &mut StdRng, height: usize, branching: usize) -> Rc<Tree> {
    if height == 0 {
        return leaf(rng.random_range(-20..=20) as f64);
    }
    let width = rng.random_range(1..=branching);
    node((0..width).map(|_| random_tree(rng, height - 1, branching)).collect())
}

/// Game whose moves walk down a fixed tree; leaves score their value.
#[derive(Clone)]
pub struct TreeGame {
    tree: Rc<Tree>,
    agents: usize,
}

impl TreeGame {
    pub fn new(agents: usize, tree: Rc<Tree>) -> Self {
        Self { tree, agents }
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        match self.tree.as_ref() {
            Tree::Leaf(_) => Vec::new(),
            Tree::Node(children) => (0..children.len()).collect(),
        }
    }

    fn successor(&self, _agent: usize, action: &usize) -> Self {
        let tree = match self.tree.as_ref() {
            Tree::Node(children) => Rc::clone(&children[*action]),
            Tree::Leaf(_) => panic!("leaves have no successors"),
        };
        Self {
            tree,
            agents: self.agents,
        }
    }

    fn score(&self) -> f64 {
        match self.tree.as_ref() {
            Tree::Leaf(value) => *value,
            Tree::Node(_) => 0.0,
        }
    }
}

/// Corridor 0..=length. Reaching `length` pays `goal_reward` and ends the
/// episode; moving left from 0 stays put.
#[derive(Debug, Clone)]
pub struct Chain {
    pub length: u8,
    pub goal_reward: f64,
}

impl Chain {
    pub fn new(length: u8, goal_reward: f64) -> Self {
        Self {
            length,
            goal_reward,
        }
    }

    pub fn actions(&self) -> impl Fn(&u8) -> Vec<&'static str> + Clone + 'static {
        let length = self.length;
        move |state: &u8| {
            if *state >= length {
                Vec::new()
            } else {
                vec!["left", "right"]
            }
        }
    }
}

impl Environment for Chain {
    type State = u8;
    type Action = &'static str;

    fn start_state(&mut self) -> u8 {
        0
    }

    fn legal_actions(&self, state: &u8) -> Vec<&'static str> {
        (self.actions())(state)
    }

    fn step(&mut self, state: &u8, action: &&'static str) -> Transition<u8> {
        let next_state = match *action {
            "right" => state + 1,
            _ => state.saturating_sub(1),
        };
        let reward = if next_state == self.length {
            self.goal_reward
        } else {
            0.0
        };
        Transition { next_state, reward }
    }
}
