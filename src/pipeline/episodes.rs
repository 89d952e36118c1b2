//! Episode loop driving a learner through an environment

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Environment, EpisodeSummary, Learner, Observer, Transition},
};

/// Episode loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    /// Number of episodes to run, training and testing combined
    pub episodes: usize,

    /// Step limit per episode
    pub max_steps: usize,

    /// Random seed handed to the learner
    pub seed: Option<u64>,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            max_steps: 1000,
            seed: None,
        }
    }
}

/// Result of an episode run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Episodes played
    pub episodes: usize,

    /// Episodes played while exploring and learning
    pub training_episodes: usize,

    /// Sum of rewards over every episode
    pub total_reward: f64,

    /// Mean episode reward
    pub average_reward: f64,

    /// Mean episode reward during training
    pub average_training_reward: f64,

    /// Mean episode reward after learning stopped
    pub average_test_reward: f64,
}

impl EpisodeResult {
    /// Summarize per-episode rewards; the first `training_episodes` entries
    /// are the training episodes.
    pub fn from_rewards(rewards: &[f64], training_episodes: usize) -> Self {
        let training_episodes = training_episodes.min(rewards.len());
        let (training, test) = rewards.split_at(training_episodes);
        let total_reward: f64 = rewards.iter().sum();

        Self {
            episodes: rewards.len(),
            training_episodes,
            total_reward,
            average_reward: mean(rewards),
            average_training_reward: mean(training),
            average_test_reward: mean(test),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Runs a learner through repeated episodes of an environment.
///
/// The learner explores and learns for its first `num_training` episodes.
/// When that many episodes have finished, its exploration rate and learning
/// rate are both set to zero for the remaining episodes.
pub struct EpisodeRunner {
    config: EpisodeConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl EpisodeRunner {
    pub fn new(config: EpisodeConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Run every configured episode.
    pub fn run<E, L>(&mut self, env: &mut E, learner: &mut L) -> Result<EpisodeResult>
    where
        E: Environment,
        L: Learner<E::State, E::Action> + ?Sized,
    {
        if let Some(seed) = self.config.seed {
            learner.set_rng_seed(seed);
        }

        let num_training = learner.params().num_training;
        let mut rewards = Vec::with_capacity(self.config.episodes);

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        for episode in 0..self.config.episodes {
            if episode == num_training {
                learner.params_mut().freeze();
            }
            let summary = self.run_episode(episode, episode < num_training, env, learner)?;
            rewards.push(summary.total_reward);

            for observer in &mut self.observers {
                observer.on_episode_end(&summary)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(EpisodeResult::from_rewards(&rewards, num_training))
    }

    fn run_episode<E, L>(
        &mut self,
        episode: usize,
        training: bool,
        env: &mut E,
        learner: &mut L,
    ) -> Result<EpisodeSummary>
    where
        E: Environment,
        L: Learner<E::State, E::Action> + ?Sized,
    {
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let mut state = env.start_state();
        let mut steps = 0;
        let mut total_reward = 0.0;

        while steps < self.config.max_steps && !env.legal_actions(&state).is_empty() {
            let Some(action) = learner.select_action(&state) else {
                break;
            };
            let Transition { next_state, reward } = env.step(&state, &action);
            learner.observe_transition(&state, &action, &next_state, reward);

            for observer in &mut self.observers {
                observer.on_transition(episode, steps, reward)?;
            }

            total_reward += reward;
            steps += 1;
            state = next_state;
        }

        Ok(EpisodeSummary {
            episode,
            steps,
            total_reward,
            training,
        })
    }
}
