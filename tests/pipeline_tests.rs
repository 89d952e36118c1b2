//! Tests for the episode pipeline and its observers

use std::sync::{Arc, Mutex};

use pacai::{
    Result,
    grid::{Cell, Direction, GridFeatures, GridWorld},
    learning::{ApproximateQAgent, LearningParams, QLearningAgent},
    pipeline::{
        EpisodeConfig, EpisodeRecord, EpisodeResult, EpisodeRunner, JsonlObserver, Learner,
        MetricsObserver, Observer,
    },
    ports::EpisodeSummary,
};

mod common;

use common::Chain;

/// Forwards every summary into a shared list so the test can read it back.
struct Recorder {
    summaries: Arc<Mutex<Vec<EpisodeSummary>>>,
    events: Arc<Mutex<Vec<String>>>,
}

impl Observer for Recorder {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.events.lock().unwrap().push(format!("start {total_episodes}"));
        Ok(())
    }

    fn on_episode_start(&mut self, episode: usize) -> Result<()> {
        self.events.lock().unwrap().push(format!("episode {episode}"));
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.summaries.lock().unwrap().push(summary.clone());
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.events.lock().unwrap().push("end".to_string());
        Ok(())
    }
}

fn recorder() -> (
    Recorder,
    Arc<Mutex<Vec<EpisodeSummary>>>,
    Arc<Mutex<Vec<String>>>,
) {
    let summaries = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let observer = Recorder {
        summaries: Arc::clone(&summaries),
        events: Arc::clone(&events),
    };
    (observer, summaries, events)
}

#[test]
fn test_chain_is_learned_then_solved_greedily() {
    let mut env = Chain::new(5, 10.0);
    let params = LearningParams::new(0.5, 0.8, 0.9).with_num_training(200);
    let mut agent = QLearningAgent::<u8, &'static str, _>::new(env.actions(), params);

    let (observer, summaries, _) = recorder();
    let mut runner = EpisodeRunner::new(EpisodeConfig {
        episodes: 210,
        max_steps: 100,
        seed: Some(42),
    })
    .with_observer(Box::new(observer));

    let result = runner.run(&mut env, &mut agent).unwrap();
    assert_eq!(result.episodes, 210);
    assert_eq!(result.training_episodes, 200);
    assert_eq!(result.average_test_reward, 10.0);

    let summaries = summaries.lock().unwrap();
    for summary in summaries.iter().skip(200) {
        assert!(!summary.training);
        // Frozen greedy play walks straight to the goal.
        assert_eq!(summary.steps, 5);
    }
    assert!(summaries.iter().take(200).all(|s| s.training));

    for state in 0..5u8 {
        assert_eq!(agent.policy(&state), Some("right"));
    }
}

#[test]
fn test_learning_stops_after_training_episodes() {
    let mut env = Chain::new(3, 1.0);
    let params = LearningParams::new(0.5, 0.5, 0.9).with_num_training(4);
    let mut agent = QLearningAgent::<u8, &'static str, _>::new(env.actions(), params);

    let mut runner = EpisodeRunner::new(EpisodeConfig {
        episodes: 4,
        max_steps: 100,
        seed: Some(1),
    });
    runner.run(&mut env, &mut agent).unwrap();
    // Every episode was a training episode, so nothing was frozen yet.
    assert_eq!(agent.params().epsilon, 0.5);
    let learned: Vec<(u8, &str, f64)> = agent
        .q_table()
        .iter()
        .map(|(state, action, value)| (*state, *action, value))
        .collect();

    agent.params_mut().num_training = 0;
    let mut runner = EpisodeRunner::new(EpisodeConfig {
        episodes: 10,
        max_steps: 100,
        seed: Some(1),
    });
    let result = runner.run(&mut env, &mut agent).unwrap();
    assert_eq!(result.training_episodes, 0);
    assert_eq!(agent.params().epsilon, 0.0);
    assert_eq!(agent.params().alpha, 0.0);
    for (state, action, value) in learned {
        assert_eq!(agent.q_value(&state, &action), value);
    }
}

#[test]
fn test_zero_training_episodes_runs_frozen() {
    let mut env = Chain::new(3, 1.0);
    let mut agent =
        QLearningAgent::<u8, &'static str, _>::new(env.actions(), LearningParams::default());

    let mut runner = EpisodeRunner::new(EpisodeConfig {
        episodes: 3,
        max_steps: 20,
        seed: Some(5),
    });
    let result = runner.run(&mut env, &mut agent).unwrap();
    assert_eq!(result.training_episodes, 0);
    assert_eq!(result.average_training_reward, 0.0);
    // The untrained greedy policy is "left" forever; episodes hit the step cap.
    assert_eq!(result.total_reward, 0.0);
}

#[test]
fn test_observer_event_order() {
    let mut env = Chain::new(2, 1.0);
    let mut agent = QLearningAgent::<u8, &'static str, _>::new(
        env.actions(),
        LearningParams::new(0.5, 0.5, 0.9).with_num_training(1),
    );
    let (observer, summaries, events) = recorder();
    let mut runner = EpisodeRunner::new(EpisodeConfig {
        episodes: 2,
        max_steps: 50,
        seed: Some(8),
    })
    .with_observer(Box::new(observer));
    runner.run(&mut env, &mut agent).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec!["start 2", "episode 0", "episode 1", "end"]
    );
    let summaries = summaries.lock().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].episode, 0);
    assert!(summaries[0].training);
    assert!(!summaries[1].training);
}

#[test]
fn test_grid_world_training_with_both_agents() {
    let world = GridWorld::book().with_noise(0.0).with_seed(4);
    let params = LearningParams::new(0.5, 0.5, 0.9).with_num_training(300);
    let config = EpisodeConfig {
        episodes: 310,
        max_steps: 200,
        seed: Some(4),
    };

    let mut tabular: QLearningAgent<Cell, Direction, GridWorld> =
        QLearningAgent::new(world.clone(), params);
    let result = EpisodeRunner::new(config.clone())
        .run(&mut world.clone(), &mut tabular)
        .unwrap();
    assert_eq!(result.average_test_reward, 1.0);

    let mut approximate: ApproximateQAgent<Cell, Direction, GridWorld, GridFeatures> =
        ApproximateQAgent::new(world.clone(), GridFeatures::new(&world), params.with_alpha(0.05));
    let result = EpisodeRunner::new(config)
        .run(&mut world.clone(), &mut approximate)
        .unwrap();
    assert_eq!(result.episodes, 310);
    assert!(approximate.weights().get(&"bias").is_finite());
    assert!(!approximate.weights().is_empty());
}

#[test]
fn test_metrics_and_jsonl_observers_in_a_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("episodes.jsonl");

    let mut env = Chain::new(3, 1.0);
    let mut agent = QLearningAgent::<u8, &'static str, _>::new(
        env.actions(),
        LearningParams::new(0.5, 0.1, 0.9).with_num_training(5),
    );
    let mut runner = EpisodeRunner::new(EpisodeConfig {
        episodes: 8,
        max_steps: 30,
        seed: Some(3),
    })
    .with_observer(Box::new(MetricsObserver::new()))
    .with_observer(Box::new(JsonlObserver::new(&path).unwrap()));
    let result = runner.run(&mut env, &mut agent).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<EpisodeRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 8);
    assert_eq!(records.iter().filter(|r| r.training).count(), 5);
    for record in &records {
        assert_eq!(record.rewards.len(), record.steps);
        assert_eq!(record.rewards.iter().sum::<f64>(), record.total_reward);
    }
    let total: f64 = records.iter().map(|r| r.total_reward).sum();
    assert_eq!(total, result.total_reward);
}

#[test]
fn test_result_round_trips_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");
    let result = EpisodeResult::from_rewards(&[1.0, 0.0, 1.0, 0.0], 2);
    result.save(&path).unwrap();
    assert_eq!(EpisodeResult::load(&path).unwrap(), result);
}
