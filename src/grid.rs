//! Grid worlds for the command-line tools and integration tests
//!
//! - [`maze`]: a text maze exposed as a [`crate::ports::SearchProblem`]
//! - [`world`]: a noisy grid MDP exposed as a [`crate::ports::Environment`]

pub mod maze;
pub mod world;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use maze::{ManhattanHeuristic, Maze};
pub use world::{GridFeatures, GridWorld};

use crate::ports::Action;

/// `(row, column)` position, with row 0 at the top.
pub type Cell = (usize, usize);

/// Compass move on a grid, plus the no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The four moving directions, in successor order.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Cell one step away in this direction, or `None` past the top or left
    /// edge. `Stop` stays put.
    pub fn apply(self, (row, column): Cell) -> Option<Cell> {
        match self {
            Direction::North => row.checked_sub(1).map(|row| (row, column)),
            Direction::South => Some((row + 1, column)),
            Direction::East => Some((row, column + 1)),
            Direction::West => column.checked_sub(1).map(|column| (row, column)),
            Direction::Stop => Some((row, column)),
        }
    }

    /// The two directions at right angles to this one.
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
            Direction::Stop => [Direction::Stop, Direction::Stop],
        }
    }
}

impl Action for Direction {
    fn is_stop(&self) -> bool {
        matches!(self, Direction::Stop)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(label)
    }
}

/// Parse a rectangular character grid into rows, rejecting ragged input.
///
/// Trailing blank lines are ignored.
fn parse_rows(text: &str) -> crate::Result<Vec<Vec<char>>> {
    let rows: Vec<Vec<char>> = text
        .trim_end_matches(['\n', '\r'])
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .collect();
    let width = rows.first().map_or(0, Vec::len);
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(crate::Error::RaggedMaze {
                row,
                expected: width,
                got: cells.len(),
            });
        }
    }
    Ok(rows)
}
