//! pacai CLI - Search, game-tree and reinforcement-learning agents
//!
//! This CLI provides:
//! - Maze solving with depth-first, breadth-first, uniform-cost and A* search
//! - Q-learning and approximate Q-learning on a grid world

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pacai")]
#[command(version, about = "Search and learning agents for grid worlds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a maze with graph search
    Search(pacai::cli::commands::search::SearchArgs),

    /// Train a Q-learning agent
    Learn(pacai::cli::commands::learn::LearnArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => pacai::cli::commands::search::execute(args),
        Commands::Learn(args) => pacai::cli::commands::learn::execute(args),
    }
}
