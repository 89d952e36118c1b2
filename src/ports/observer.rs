//! Observer port - abstraction for episode observation and data collection
//!
//! Observers are how the crate reports what happens during training. The
//! episode loop never prints; progress bars, metrics and exports are all
//! adapters of this trait.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Summary of one finished episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Episode index (0-based)
    pub episode: usize,
    /// Number of steps taken
    pub steps: usize,
    /// Sum of rewards collected
    pub total_reward: f64,
    /// Whether the learner was still exploring and learning
    pub training: bool,
}

/// Observer trait for monitoring episodes
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_transition(...)` - For each environment step
///    - `on_episode_end(summary)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use pacai::ports::{EpisodeSummary, Observer};
///
/// struct CountingObserver {
///     episodes: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_episode_end(&mut self, _summary: &EpisodeSummary) -> pacai::Result<()> {
///         self.episodes += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each environment step and learning update.
    fn on_transition(&mut self, _episode: usize, _step: usize, _reward: f64) -> Result<()> {
        Ok(())
    }

    fn on_episode_end(&mut self, _summary: &EpisodeSummary) -> Result<()> {
        Ok(())
    }

    /// Called when training completes. Use this to flush outputs or display
    /// summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
