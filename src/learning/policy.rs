//! Greedy and epsilon-greedy selection shared by the Q-learning agents

use rand::{Rng, seq::IndexedRandom};

/// First action with the highest Q-value, together with that value.
///
/// Returns `None` when `actions` is empty.
pub(crate) fn greedy<A, F>(actions: &[A], q_value: F) -> Option<(A, f64)>
where
    A: Clone,
    F: Fn(&A) -> f64,
{
    let mut best: Option<(A, f64)> = None;
    for action in actions {
        let value = q_value(action);
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((action.clone(), value)),
        }
    }
    best
}

/// With probability `epsilon` a uniformly random action, otherwise
/// `exploit()`. Returns `None` when `actions` is empty.
pub(crate) fn epsilon_greedy<A, R, F>(
    rng: &mut R,
    epsilon: f64,
    actions: &[A],
    exploit: F,
) -> Option<A>
where
    A: Clone,
    R: Rng,
    F: FnOnce() -> Option<A>,
{
    if actions.is_empty() {
        return None;
    }
    if rng.random::<f64>() < epsilon {
        // Explore: random action
        actions.choose(rng).cloned()
    } else {
        // Exploit: greedy action based on Q-values
        exploit()
    }
}
