//! Observer implementations for episode pipelines
//!
//! Observers allow composable data collection during training without coupling
//! the episode loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{EpisodeSummary, Observer},
};

/// Progress bar observer - Shows episodes done and the running mean reward
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    episodes: usize,
    total_reward: f64,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            episodes: 0,
            total_reward: 0.0,
        }
    }

    fn message(&self) -> String {
        let average = if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f64
        };
        format!("avg reward {average:.3}")
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.episodes += 1;
        self.total_reward += summary.total_reward;

        if let Some(pb) = &self.progress_bar {
            pb.set_position(self.episodes as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Metrics observer - Tracks per-episode rewards and lengths
#[derive(Debug, Default)]
pub struct MetricsObserver {
    rewards: Vec<f64>,
    lengths: Vec<usize>,
    training_episodes: usize,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episodes(&self) -> usize {
        self.rewards.len()
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Get average episode reward
    pub fn average_reward(&self) -> f64 {
        average(&self.rewards)
    }

    /// Mean reward of the last `window` episodes.
    pub fn recent_average(&self, window: usize) -> f64 {
        let start = self.rewards.len().saturating_sub(window);
        average(&self.rewards[start..])
    }

    /// Get average episode length
    pub fn average_length(&self) -> f64 {
        if self.lengths.is_empty() {
            0.0
        } else {
            self.lengths.iter().sum::<usize>() as f64 / self.lengths.len() as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        let (training, test) = self.rewards.split_at(self.training_episodes);
        MetricsSummary {
            episodes: self.episodes(),
            training_episodes: self.training_episodes,
            average_reward: self.average_reward(),
            average_training_reward: average(training),
            average_test_reward: average(test),
            average_length: self.average_length(),
            best_reward: self.rewards.iter().copied().reduce(f64::max),
        }
    }
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Summary of episode metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub training_episodes: usize,
    pub average_reward: f64,
    pub average_training_reward: f64,
    pub average_test_reward: f64,
    pub average_length: f64,
    pub best_reward: Option<f64>,
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.rewards.push(summary.total_reward);
        self.lengths.push(summary.steps);
        if summary.training {
            self.training_episodes += 1;
        }
        Ok(())
    }
}

/// One JSONL line: an episode with the reward of each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode: usize,
    pub training: bool,
    pub steps: usize,
    pub total_reward: f64,
    pub rewards: Vec<f64>,
}

/// JSONL observer - Exports episodes to JSON Lines format
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_rewards: Vec<f64>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            current_rewards: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        self.current_rewards.clear();
        Ok(())
    }

    fn on_transition(&mut self, _episode: usize, _step: usize, reward: f64) -> Result<()> {
        self.current_rewards.push(reward);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        let record = EpisodeRecord {
            episode: summary.episode,
            training: summary.training,
            steps: summary.steps,
            total_reward: summary.total_reward,
            rewards: std::mem::take(&mut self.current_rewards),
        };

        // Write as JSONL (one JSON object per line)
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(episode: usize, total_reward: f64, steps: usize, training: bool) -> EpisodeSummary {
        EpisodeSummary {
            episode,
            steps,
            total_reward,
            training,
        }
    }

    #[test]
    fn test_metrics_observer() {
        let mut observer = MetricsObserver::new();
        assert_eq!(observer.average_reward(), 0.0);

        observer.on_episode_end(&summary(0, -1.0, 4, true)).unwrap();
        observer.on_episode_end(&summary(1, 1.0, 6, true)).unwrap();
        observer.on_episode_end(&summary(2, 3.0, 2, false)).unwrap();

        let metrics = observer.summary();
        assert_eq!(metrics.episodes, 3);
        assert_eq!(metrics.training_episodes, 2);
        assert_eq!(metrics.average_reward, 1.0);
        assert_eq!(metrics.average_training_reward, 0.0);
        assert_eq!(metrics.average_test_reward, 3.0);
        assert_eq!(metrics.average_length, 4.0);
        assert_eq!(metrics.best_reward, Some(3.0));
        assert_eq!(observer.recent_average(2), 2.0);
    }

    #[test]
    fn test_jsonl_observer_writes_one_line_per_episode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.jsonl");
        let mut observer = JsonlObserver::new(&path).unwrap();

        for episode in 0..2 {
            observer.on_episode_start(episode).unwrap();
            observer.on_transition(episode, 0, 0.5).unwrap();
            observer.on_transition(episode, 1, 1.5).unwrap();
            observer.on_episode_end(&summary(episode, 2.0, 2, episode == 0)).unwrap();
        }
        observer.on_training_end().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let records: Vec<EpisodeRecord> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].rewards, vec![0.5, 1.5]);
        assert!(records[0].training);
        assert!(!records[1].training);
    }
}
