//! Uniform-cost and A* search

use std::collections::HashSet;

use super::{
    ParentMap, SearchOutcome,
    frontier::{Frontier, PriorityQueue},
};
use crate::ports::{Heuristic, SearchProblem, Successor};

/// Search the node of least total path cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    best_first_search(problem, |_, cost| cost)
}

/// Search the node with the lowest path cost plus heuristic estimate first.
///
/// Plans are cost-optimal when `heuristic` is consistent. States are never
/// re-expanded, so an inconsistent heuristic can yield a more expensive plan.
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    best_first_search(problem, |state, cost| {
        cost + heuristic.estimate(state, problem)
    })
}

/// Frontier entry: the state, its path cost, and the edge that discovered it.
struct Node<S, A> {
    state: S,
    cost: f64,
    via: Option<(S, A)>,
}

/// Priority-ordered graph search.
///
/// A state may sit in the frontier more than once with different path costs,
/// but it is expanded only the first time it is popped. Its parent link is
/// fixed at that moment.
fn best_first_search<P, F>(problem: &P, priority: F) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    F: Fn(&P::State, f64) -> f64,
{
    let start = problem.start_state();
    let mut frontier: PriorityQueue<Node<P::State, P::Action>> = PriorityQueue::new();
    let mut closed: HashSet<P::State> = HashSet::new();
    let mut parents = ParentMap::new();

    let start_priority = priority(&start, 0.0);
    frontier.push((
        Node {
            state: start,
            cost: 0.0,
            via: None,
        },
        start_priority,
    ));

    let mut expanded = 0;
    while let Some((node, _)) = frontier.pop() {
        if !closed.insert(node.state.clone()) {
            continue;
        }
        if let Some((parent, action)) = node.via {
            parents.record(node.state.clone(), parent, action);
        }

        expanded += 1;
        if problem.is_goal(&node.state) {
            return SearchOutcome::found(parents.path_to(&node.state), expanded);
        }

        for Successor {
            state: next,
            action,
            cost: step_cost,
        } in problem.successors(&node.state)
        {
            if closed.contains(&next) {
                continue;
            }
            let cost = node.cost + step_cost;
            let next_priority = priority(&next, cost);
            frontier.push((
                Node {
                    state: next,
                    cost,
                    via: Some((node.state.clone(), action)),
                },
                next_priority,
            ));
        }
    }

    SearchOutcome::unreachable(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NullHeuristic;

    /// Explicit weighted digraph over single-letter states.
    struct Graph {
        edges: Vec<(char, char, f64)>,
        goal: char,
    }

    impl SearchProblem for Graph {
        type State = char;
        type Action = String;

        fn start_state(&self) -> char {
            'S'
        }

        fn is_goal(&self, state: &char) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &char) -> Vec<Successor<char, String>> {
            self.edges
                .iter()
                .filter(|(from, _, _)| from == state)
                .map(|&(from, to, cost)| Successor::new(to, format!("{from}->{to}"), cost))
                .collect()
        }
    }

    fn detour_graph() -> Graph {
        // The direct edge is discovered first but costs more than the detour.
        Graph {
            edges: vec![
                ('S', 'G', 10.0),
                ('S', 'A', 1.0),
                ('A', 'B', 1.0),
                ('B', 'G', 1.0),
            ],
            goal: 'G',
        }
    }

    #[test]
    fn test_ucs_prefers_cheap_detour() {
        let outcome = uniform_cost_search(&detour_graph());
        assert_eq!(
            outcome.plan().map(<[String]>::to_vec),
            Some(vec!["S->A".to_string(), "A->B".into(), "B->G".into()])
        );
    }

    #[test]
    fn test_cheaper_parent_found_later_wins() {
        // A is first reached directly at cost 5, then through B at cost 2.
        let graph = Graph {
            edges: vec![
                ('S', 'A', 5.0),
                ('S', 'B', 1.0),
                ('B', 'A', 1.0),
                ('A', 'G', 1.0),
            ],
            goal: 'G',
        };
        let outcome = uniform_cost_search(&graph);
        assert_eq!(
            outcome.plan().map(<[String]>::to_vec),
            Some(vec!["S->B".to_string(), "B->A".into(), "A->G".into()])
        );
        // S, B, A and G; the stale cost-5 entry for A is never expanded.
        assert_eq!(outcome.expanded(), 4);
    }

    #[test]
    fn test_a_star_with_null_heuristic_matches_ucs() {
        let graph = detour_graph();
        assert_eq!(
            a_star_search(&graph, &NullHeuristic),
            uniform_cost_search(&graph)
        );
    }

    #[test]
    fn test_a_star_heuristic_prunes_expansions() {
        let graph = Graph {
            edges: vec![
                ('S', 'A', 1.0),
                ('S', 'X', 1.0),
                ('X', 'Y', 1.0),
                ('A', 'G', 1.0),
            ],
            goal: 'G',
        };
        let toward_goal = |state: &char, _: &Graph| match state {
            'S' => 2.0,
            'A' => 1.0,
            'G' => 0.0,
            _ => 5.0,
        };

        let informed = a_star_search(&graph, &toward_goal);
        let uninformed = uniform_cost_search(&graph);
        assert_eq!(informed.plan(), uninformed.plan());
        assert!(informed.expanded() < uninformed.expanded());
    }

    #[test]
    fn test_unreachable_goal_yields_no_plan() {
        let graph = Graph {
            edges: vec![('S', 'A', 1.0)],
            goal: 'Z',
        };
        let outcome = a_star_search(&graph, &NullHeuristic);
        assert_eq!(outcome.plan(), None);
        assert_eq!(outcome.expanded(), 2);
    }
}
