//! Explicit game trees for unit tests

use std::rc::Rc;

use crate::ports::GameState;

pub(crate) enum Tree {
    Leaf(f64),
    Node(Vec<(&'static str, Rc<Tree>)>),
}

pub(crate) fn leaf(value: f64) -> Rc<Tree> {
    Rc::new(Tree::Leaf(value))
}

pub(crate) fn node(children: Vec<(&'static str, Rc<Tree>)>) -> Rc<Tree> {
    Rc::new(Tree::Node(children))
}

/// Game whose moves walk down a fixed tree; leaves score their value.
#[derive(Clone)]
pub(crate) struct TreeGame {
    tree: Rc<Tree>,
    agents: usize,
}

impl TreeGame {
    pub(crate) fn new(agents: usize, tree: Rc<Tree>) -> Self {
        Self { tree, agents }
    }
}

impl GameState for TreeGame {
    type Action = &'static str;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<&'static str> {
        match self.tree.as_ref() {
            Tree::Leaf(_) => Vec::new(),
            Tree::Node(children) => children.iter().map(|(name, _)| *name).collect(),
        }
    }

    fn successor(&self, _agent: usize, action: &&'static str) -> Self {
        let child = match self.tree.as_ref() {
            Tree::Node(children) => children
                .iter()
                .find(|(name, _)| name == action)
                .map(|(_, child)| Rc::clone(child)),
            Tree::Leaf(_) => None,
        };
        Self {
            tree: child.expect("test trees only expand legal actions"),
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

/// Classic two-agent, one-ply tree: minimax value 3 via "left".
pub(crate) fn textbook_tree() -> TreeGame {
    TreeGame::new(
        2,
        node(vec![
            ("left", node(vec![("a", leaf(3.0)), ("b", leaf(12.0)), ("c", leaf(8.0))])),
            ("middle", node(vec![("a", leaf(2.0)), ("b", leaf(4.0)), ("c", leaf(6.0))])),
            ("right", node(vec![("a", leaf(14.0)), ("b", leaf(5.0)), ("c", leaf(2.0))])),
        ]),
    )
}
