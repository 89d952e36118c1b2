//! Search command - Solve a text maze with graph search

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{format_number, print_kv, print_section, print_subsection},
    grid::{ManhattanHeuristic, Maze},
    ports::NullHeuristic,
    search::SearchAlgorithm,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a maze with graph search")]
pub struct SearchArgs {
    /// Maze layout file (`%` wall, `P` start, `.` goal)
    #[arg(long, short = 'm')]
    pub maze: PathBuf,

    /// Search algorithm: dfs, bfs, ucs or astar
    #[arg(long, short = 'a', default_value = "astar")]
    pub algorithm: SearchAlgorithm,

    /// Heuristic used by A*
    #[arg(long, value_enum, default_value = "manhattan")]
    pub heuristic: HeuristicType,

    /// Print the maze with the plan drawn in
    #[arg(long)]
    pub show_path: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeuristicType {
    /// Manhattan distance to the nearest goal
    Manhattan,
    /// Always zero (A* becomes uniform-cost search)
    Null,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let maze = Maze::load(&args.maze)?;

    let outcome = match args.heuristic {
        HeuristicType::Manhattan => args.algorithm.run(&maze, &ManhattanHeuristic),
        HeuristicType::Null => args.algorithm.run(&maze, &NullHeuristic),
    };

    print_section(&format!("{} on {}", args.algorithm, args.maze.display()));
    print_kv("Maze size", format!("{}x{}", maze.width(), maze.height()));
    print_kv("Nodes expanded", format_number(outcome.expanded()));

    let Some(plan) = outcome.plan() else {
        print_kv("Result", "no goal is reachable");
        return Ok(());
    };

    match maze.follow(plan) {
        Some((_, cost)) => print_kv("Path cost", cost),
        None => anyhow::bail!("search returned a plan that walks into a wall"),
    }
    print_kv("Plan length", format_number(plan.len()));
    if !plan.is_empty() {
        let moves: Vec<String> = plan.iter().map(ToString::to_string).collect();
        print_kv("Plan", moves.join(" "));
    }

    if args.show_path {
        print_subsection("Path");
        print!("{}", maze.render_path(plan));
    }

    Ok(())
}
