//! Grid MDP used to train the Q-learning agents
//!
//! ```text
//! ...+
//! .#.-
//! S...
//! ```
//!
//! `#` is a wall, `S` the start, `.` open floor, `+` an exit worth +1 and `-`
//! an exit worth -1. Entering an exit ends the episode. With probability
//! `noise` a move slips to one of the two perpendicular directions; moves into
//! walls or off the grid leave the agent in place.

use std::{fs, path::Path};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::{Cell, Direction, parse_rows};
use crate::{
    Error, Result,
    learning::FeatureVector,
    ports::{ActionSource, Environment, FeatureExtractor, Transition},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tile {
    Wall,
    Open,
    Exit(f64),
}

#[derive(Debug, Clone)]
pub struct GridWorld {
    tiles: Vec<Vec<Tile>>,
    start: Cell,
    living_reward: f64,
    noise: f64,
    rng: StdRng,
}

impl GridWorld {
    /// The three-by-four world from the reinforcement-learning textbook.
    pub fn book() -> Self {
        use Tile::{Exit, Open, Wall};
        Self {
            tiles: vec![
                vec![Open, Open, Open, Exit(1.0)],
                vec![Open, Wall, Open, Exit(-1.0)],
                vec![Open, Open, Open, Open],
            ],
            start: (2, 0),
            living_reward: 0.0,
            noise: 0.2,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Parse a world from its text layout. Noise and living reward start at 0.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = parse_rows(text)?;
        let mut tiles = Vec::with_capacity(rows.len());
        let mut start = None;

        for (row, cells) in rows.iter().enumerate() {
            let mut tile_row = Vec::with_capacity(cells.len());
            for (column, &character) in cells.iter().enumerate() {
                let tile = match character {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    '+' => Tile::Exit(1.0),
                    '-' => Tile::Exit(-1.0),
                    'S' => {
                        start = Some((row, column));
                        Tile::Open
                    }
                    _ => {
                        return Err(Error::InvalidMazeCharacter {
                            character,
                            row,
                            column,
                        });
                    }
                };
                tile_row.push(tile);
            }
            tiles.push(tile_row);
        }

        let start = start.ok_or_else(|| Error::MissingMazeCell {
            cell: "start (S)".to_string(),
        })?;

        Ok(Self {
            tiles,
            start,
            living_reward: 0.0,
            noise: 0.0,
            rng: StdRng::from_rng(&mut rand::rng()),
        })
    }

    /// Read and parse a world layout file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read grid world {}", path.display()),
            source,
        })?;
        Self::parse(&text)
    }

    /// Reward for every step that does not enter an exit.
    pub fn with_living_reward(mut self, living_reward: f64) -> Self {
        self.living_reward = living_reward;
        self
    }

    /// Probability that a move slips sideways.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    fn tile(&self, (row, column): Cell) -> Tile {
        self.tiles
            .get(row)
            .and_then(|tiles| tiles.get(column))
            .copied()
            .unwrap_or(Tile::Wall)
    }

    /// Whether `cell` is a wall; cells outside the grid count as walls.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.tile(cell) == Tile::Wall
    }

    /// Reward of the exit at `cell`, if `cell` is an exit.
    pub fn exit_reward(&self, cell: Cell) -> Option<f64> {
        match self.tile(cell) {
            Tile::Exit(reward) => Some(reward),
            _ => None,
        }
    }

    /// Cell reached by moving `direction` without noise.
    pub fn destination(&self, cell: Cell, direction: Direction) -> Cell {
        direction
            .apply(cell)
            .filter(|next| !self.is_wall(*next))
            .unwrap_or(cell)
    }

    fn exits(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter_map(move |(column, tile)| match tile {
                    Tile::Exit(reward) => Some(((row, column), *reward)),
                    _ => None,
                })
        })
    }
}

impl ActionSource<Cell, Direction> for GridWorld {
    fn legal_actions(&self, state: &Cell) -> Vec<Direction> {
        if self.exit_reward(*state).is_some() {
            Vec::new()
        } else {
            Direction::MOVES.to_vec()
        }
    }
}

impl Environment for GridWorld {
    type State = Cell;
    type Action = Direction;

    fn start_state(&mut self) -> Cell {
        self.start
    }

    fn legal_actions(&self, state: &Cell) -> Vec<Direction> {
        ActionSource::legal_actions(self, state)
    }

    fn step(&mut self, state: &Cell, action: &Direction) -> Transition<Cell> {
        let mut direction = *action;
        if self.noise > 0.0 && self.rng.random::<f64>() < self.noise {
            direction = *direction.perpendicular().choose(&mut self.rng).unwrap_or(action);
        }
        let next_state = self.destination(*state, direction);
        let reward = self.exit_reward(next_state).unwrap_or(self.living_reward);
        Transition { next_state, reward }
    }
}

/// Hand-written features for approximate Q-learning on a [`GridWorld`].
///
/// - `bias`: always 1
/// - `exit-distance`: Manhattan distance from the intended destination to
///   the nearest positive exit, scaled by the grid size
/// - `hazard`: 1 when the intended destination is a negative exit
#[derive(Debug, Clone)]
pub struct GridFeatures {
    world: GridWorld,
    goals: Vec<Cell>,
}

impl GridFeatures {
    pub fn new(world: &GridWorld) -> Self {
        let goals = world
            .exits()
            .filter(|(_, reward)| *reward > 0.0)
            .map(|(cell, _)| cell)
            .collect();
        Self {
            world: world.clone(),
            goals,
        }
    }
}

impl FeatureExtractor<Cell, Direction> for GridFeatures {
    type Key = &'static str;

    fn features(&self, state: &Cell, action: &Direction) -> FeatureVector<&'static str> {
        let (row, column) = self.world.destination(*state, *action);
        let mut features = FeatureVector::new();
        features.insert("bias", 1.0);

        let scale = (self.world.height() + self.world.width()) as f64;
        if let Some(distance) = self
            .goals
            .iter()
            .map(|&(goal_row, goal_column)| row.abs_diff(goal_row) + column.abs_diff(goal_column))
            .min()
        {
            features.insert("exit-distance", distance as f64 / scale);
        }
        if self.world.exit_reward((row, column)).is_some_and(|reward| reward < 0.0) {
            features.insert("hazard", 1.0);
        }
        features
    }
}
