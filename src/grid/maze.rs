//! Text mazes as search problems
//!
//! ```text
//! %%%%%%%
//! %P    %
//! % %%% %
//! %    .%
//! %%%%%%%
//! ```
//!
//! `%` is a wall, `P` the start, `.` a goal and a space open floor. Every
//! move costs 1.

use std::{collections::HashSet, fs, path::Path};

use super::{Cell, Direction, parse_rows};
use crate::{
    Error, Result,
    ports::{Heuristic, SearchProblem, Successor},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<Vec<bool>>,
    start: Cell,
    goals: HashSet<Cell>,
}

impl Maze {
    /// Parse a maze from its text layout.
    ///
    /// # Errors
    ///
    /// Fails on characters other than `%`, `P`, `.` and space, on ragged
    /// rows, and when there is no start or no goal.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = parse_rows(text)?;
        let mut walls = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut goals = HashSet::new();

        for (row, cells) in rows.iter().enumerate() {
            let mut wall_row = Vec::with_capacity(cells.len());
            for (column, &character) in cells.iter().enumerate() {
                match character {
                    '%' => wall_row.push(true),
                    ' ' => wall_row.push(false),
                    'P' => {
                        start = Some((row, column));
                        wall_row.push(false);
                    }
                    '.' => {
                        goals.insert((row, column));
                        wall_row.push(false);
                    }
                    _ => {
                        return Err(Error::InvalidMazeCharacter {
                            character,
                            row,
                            column,
                        });
                    }
                }
            }
            walls.push(wall_row);
        }

        let start = start.ok_or_else(|| Error::MissingMazeCell {
            cell: "start (P)".to_string(),
        })?;
        if goals.is_empty() {
            return Err(Error::MissingMazeCell {
                cell: "goal (.)".to_string(),
            });
        }

        Ok(Self {
            walls,
            start,
            goals,
        })
    }

    /// Read and parse a maze file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read maze {}", path.display()),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goals(&self) -> impl Iterator<Item = &Cell> {
        self.goals.iter()
    }

    pub fn height(&self) -> usize {
        self.walls.len()
    }

    pub fn width(&self) -> usize {
        self.walls.first().map_or(0, Vec::len)
    }

    /// Whether `cell` is a wall; cells outside the grid count as walls.
    pub fn is_wall(&self, (row, column): Cell) -> bool {
        self.walls
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or(true)
    }

    /// Walk `actions` from the start cell.
    ///
    /// Returns the final cell and total cost, or `None` if a move runs into a
    /// wall.
    pub fn follow(&self, actions: &[Direction]) -> Option<(Cell, f64)> {
        let mut cell = self.start;
        let mut cost = 0.0;
        for action in actions {
            let next = action.apply(cell)?;
            if self.is_wall(next) {
                return None;
            }
            cell = next;
            cost += 1.0;
        }
        Some((cell, cost))
    }

    /// Maze text with the cells visited by `actions` marked `o`.
    pub fn render_path(&self, actions: &[Direction]) -> String {
        let mut visited = HashSet::new();
        let mut cell = self.start;
        for action in actions {
            match action.apply(cell) {
                Some(next) if !self.is_wall(next) => {
                    cell = next;
                    visited.insert(cell);
                }
                _ => break,
            }
        }

        let mut out = String::new();
        for (row, cells) in self.walls.iter().enumerate() {
            for (column, &wall) in cells.iter().enumerate() {
                let here = (row, column);
                let symbol = if wall {
                    '%'
                } else if here == self.start {
                    'P'
                } else if self.goals.contains(&here) {
                    '.'
                } else if visited.contains(&here) {
                    'o'
                } else {
                    ' '
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl SearchProblem for Maze {
    type State = Cell;
    type Action = Direction;

    fn start_state(&self) -> Cell {
        self.start
    }

    fn is_goal(&self, state: &Cell) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Cell) -> Vec<Successor<Cell, Direction>> {
        Direction::MOVES
            .iter()
            .filter_map(|&direction| {
                direction
                    .apply(*state)
                    .filter(|next| !self.is_wall(*next))
                    .map(|next| Successor::new(next, direction, 1.0))
            })
            .collect()
    }
}

/// Manhattan distance to the nearest goal; consistent for unit-cost moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic<Maze> for ManhattanHeuristic {
    fn estimate(&self, &(row, column): &Cell, maze: &Maze) -> f64 {
        maze.goals()
            .map(|&(goal_row, goal_column)| row.abs_diff(goal_row) + column.abs_diff(goal_column))
            .min()
            .map_or(0.0, |distance| distance as f64)
    }
}
