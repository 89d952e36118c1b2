//! Game state port - the multi-agent world explored by adversarial search
//!
//! Agent 0 is the maximizing "self"; agents 1.. are adversaries (minimax,
//! alpha-beta) or chance players (expectimax).

use crate::ports::problem::Action;

/// Turn-taking game state.
pub trait GameState: Sized {
    type Action: Action;

    /// Number of agents taking turns; always at least 1.
    fn num_agents(&self) -> usize;

    /// Legal actions for `agent`; empty when the state is terminal.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// State produced when `agent` takes `action`.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Current game score.
    fn score(&self) -> f64;
}

/// Leaf evaluation used by tree search. Higher is better for agent 0.
pub trait Evaluation<G> {
    fn evaluate(&self, state: &G) -> f64;
}

impl<G, F> Evaluation<G> for F
where
    F: Fn(&G) -> f64,
{
    fn evaluate(&self, state: &G) -> f64 {
        self(state)
    }
}

/// Evaluates a state by its game score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluation;

impl<G: GameState> Evaluation<G> for ScoreEvaluation {
    fn evaluate(&self, state: &G) -> f64 {
        state.score()
    }
}

/// Single-step evaluation of taking `action` in `state`, used by reflex agents.
pub trait ActionEvaluation<G: GameState> {
    fn evaluate(&self, state: &G, action: &G::Action) -> f64;
}

impl<G, F> ActionEvaluation<G> for F
where
    G: GameState,
    F: Fn(&G, &G::Action) -> f64,
{
    fn evaluate(&self, state: &G, action: &G::Action) -> f64 {
        self(state, action)
    }
}

/// Scores an action by the game score of agent 0's successor state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessorScore;

impl<G: GameState> ActionEvaluation<G> for SuccessorScore {
    fn evaluate(&self, state: &G, action: &G::Action) -> f64 {
        state.successor(0, action).score()
    }
}
