//! Learn command - Train a Q-learning agent on a grid world

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{format_number, print_kv, print_section, print_subsection, render_policy},
    grid::{Cell, Direction, GridFeatures, GridWorld},
    learning::{ApproximateQAgent, LearningParams, QLearningAgent},
    pipeline::{
        EpisodeConfig, EpisodeResult, EpisodeRunner, JsonlObserver, Learner, ProgressObserver,
    },
};

const DEFAULT_TRAINING_EPISODES: usize = 90;

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent", allow_negative_numbers = true)]
pub struct LearnArgs {
    /// Grid world layout file (`#` wall, `.` open, `+`/`-` exits, `S` start);
    /// the book world when omitted
    #[arg(long)]
    pub world: Option<PathBuf>,

    /// Type of agent to train
    #[arg(long, value_enum, default_value = "q")]
    pub agent: AgentType,

    /// Total number of episodes (training followed by testing)
    #[arg(long, short = 'n', default_value_t = 100)]
    pub episodes: usize,

    /// Number of training episodes; learning stops afterwards
    /// (overrides --config, defaults to 90 without one)
    #[arg(long, short = 't')]
    pub training: Option<usize>,

    /// Step limit per episode
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,

    /// Learning rate (overrides --config)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Exploration rate (overrides --config)
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Discount factor (overrides --config)
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Probability that a move slips sideways
    #[arg(long, default_value_t = 0.2)]
    pub noise: f64,

    /// Reward for every step that does not end the episode
    #[arg(long, default_value_t = 0.0)]
    pub living_reward: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with learning parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Optional file for JSONL episode records
    #[arg(long)]
    pub jsonl: Option<PathBuf>,

    /// Optional path for writing the result as JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AgentType {
    /// Tabular Q-learning
    Q,
    /// Linear approximate Q-learning over grid features
    Approximate,
}

fn resolve_params(args: &LearnArgs) -> Result<LearningParams> {
    let mut params = match &args.config {
        Some(path) => LearningParams::load(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => LearningParams::default().with_num_training(DEFAULT_TRAINING_EPISODES),
    };
    if let Some(alpha) = args.alpha {
        params.alpha = alpha;
    }
    if let Some(epsilon) = args.epsilon {
        params.epsilon = epsilon;
    }
    if let Some(gamma) = args.gamma {
        params.gamma = gamma;
    }
    if let Some(training) = args.training {
        params.num_training = training;
    }
    params.validate()?;
    Ok(params)
}

pub fn execute(args: LearnArgs) -> Result<()> {
    let params = resolve_params(&args)?;

    let world = match &args.world {
        Some(path) => GridWorld::load(path)?,
        None => GridWorld::book(),
    };
    let mut world = world
        .with_noise(args.noise)
        .with_living_reward(args.living_reward);
    if let Some(seed) = args.seed {
        world = world.with_seed(seed.wrapping_add(1));
    }

    print_section("Q-learning on a grid world");
    if let Some(path) = &args.world {
        print_kv("World", path.display());
    }
    print_kv("Agent", format!("{:?}", args.agent));
    print_kv("Episodes", format_number(args.episodes));
    print_kv("Training episodes", format_number(params.num_training));
    print_kv("Step limit", format_number(args.max_steps));
    print_kv(
        "Parameters",
        format!(
            "alpha={} epsilon={} gamma={}",
            params.alpha, params.epsilon, params.gamma
        ),
    );

    match args.agent {
        AgentType::Q => {
            let mut agent = QLearningAgent::new(world.clone(), params);
            let result = train(&args, &mut world, &mut agent)?;
            report(&args, &world, &agent, &result)?;
        }
        AgentType::Approximate => {
            let features = GridFeatures::new(&world);
            let mut agent = ApproximateQAgent::new(world.clone(), features, params);
            let result = train(&args, &mut world, &mut agent)?;
            report(&args, &world, &agent, &result)?;

            print_subsection("Feature weights");
            let mut weights: Vec<(&str, f64)> =
                agent.weights().iter().map(|(key, value)| (*key, value)).collect();
            weights.sort_by(|a, b| a.0.cmp(b.0));
            for (name, weight) in weights {
                print_kv(name, format!("{weight:.4}"));
            }
        }
    }

    Ok(())
}

fn train<L>(args: &LearnArgs, world: &mut GridWorld, agent: &mut L) -> Result<EpisodeResult>
where
    L: Learner<Cell, Direction>,
{
    let config = EpisodeConfig {
        episodes: args.episodes,
        max_steps: args.max_steps,
        seed: args.seed,
    };

    let mut runner = EpisodeRunner::new(config);
    if !args.no_progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.jsonl {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("creating {}", path.display()))?;
        runner = runner.with_observer(Box::new(observer));
    }

    Ok(runner.run(world, agent)?)
}

fn report<L>(args: &LearnArgs, world: &GridWorld, agent: &L, result: &EpisodeResult) -> Result<()>
where
    L: Learner<Cell, Direction>,
{
    print_subsection(&format!("Results ({})", agent.name()));
    print_kv("Average reward", format!("{:.4}", result.average_reward));
    print_kv("Training average", format!("{:.4}", result.average_training_reward));
    print_kv("Test average", format!("{:.4}", result.average_test_reward));
    print_kv("Start value", format!("{:.4}", agent.value(&world.start())));

    print_subsection("Greedy policy");
    print!("{}", render_policy(world, |cell| agent.policy(&cell)));

    if let Some(path) = &args.output {
        result.save(path)?;
        println!("\nResult saved to {}", path.display());
    }
    Ok(())
}
