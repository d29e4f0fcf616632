//! Game state and core simulation types

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::BoardState;
use super::{difficulty, movement};
use crate::consts::*;

/// A single queued grid move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Away from the start, +1 row
    Forward,
    /// Toward the start, -1 row
    Backward,
    /// -1 tile
    Left,
    /// +1 tile
    Right,
}

impl Direction {
    /// Row delta applied when a step in this direction completes
    #[inline]
    pub fn row_delta(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Tile delta applied when a step in this direction completes
    #[inline]
    pub fn tile_delta(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Forward | Direction::Backward => 0,
        }
    }
}

/// Tree size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeHeight {
    Low,
    Mid,
    High,
}

impl TreeHeight {
    pub const ALL: [TreeHeight; 3] = [TreeHeight::Low, TreeHeight::Mid, TreeHeight::High];

    /// World-space canopy height
    pub fn world_height(self) -> f32 {
        match self {
            TreeHeight::Low => 20.0,
            TreeHeight::Mid => 45.0,
            TreeHeight::High => 60.0,
        }
    }
}

/// A tree blocking one tile of a forest row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub tile_index: i32,
    pub height: TreeHeight,
}

/// Lane occupant kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Truck,
}

impl VehicleKind {
    /// Vehicles in a lane of this kind before difficulty scaling
    pub fn base_count(self) -> u32 {
        match self {
            VehicleKind::Car => CARS_PER_LANE,
            VehicleKind::Truck => TRUCKS_PER_LANE,
        }
    }

    /// Tiles reserved on each side of the center at generation time
    pub fn footprint_radius(self) -> i32 {
        match self {
            VehicleKind::Car => 1,
            VehicleKind::Truck => 2,
        }
    }

    /// Collision half-extent along the lane
    pub fn half_length(self) -> f32 {
        match self {
            VehicleKind::Car => CAR_HALF_LENGTH,
            VehicleKind::Truck => TRUCK_HALF_LENGTH,
        }
    }

    /// Collision half-extent across the lane
    pub fn half_width(self) -> f32 {
        match self {
            VehicleKind::Car => CAR_HALF_WIDTH,
            VehicleKind::Truck => TRUCK_HALF_WIDTH,
        }
    }
}

/// A vehicle in a lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Tile the vehicle was placed on at generation time
    pub initial_tile_index: i32,
    /// Body color (RGB)
    pub color: u32,
    /// Current world-space x, advanced continuously while running
    pub x: f32,
}

impl Vehicle {
    pub fn new(initial_tile_index: i32, color: u32) -> Self {
        Self {
            initial_tile_index,
            color,
            x: crate::tile_to_world(initial_tile_index),
        }
    }
}

/// A traffic lane: shared kind, direction and speed for all its vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub kind: VehicleKind,
    /// true = positive-x travel
    pub direction: bool,
    /// Pixels per second, always > 0
    pub speed: f32,
    pub vehicles: Vec<Vehicle>,
}

/// One strip of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Row {
    Forest { trees: Vec<Tree> },
    Lane(Lane),
}

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

/// Semantic events for audio/haptic/visual collaborators. The core never
/// waits on their consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A step completed
    Moved(Direction),
    /// Score rose to the carried value
    ScoreIncreased(u32),
    /// Collision ended the run
    GameOver { score: u32 },
    /// The game entered the paused state
    Paused,
}

/// The player's grid position and queued moves
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub current_row: i32,
    pub current_tile: i32,
    pub moves_queue: VecDeque<Direction>,
    /// Seconds into the front-of-queue step
    pub step_elapsed: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub status: GameStatus,
    /// Rows advanced this run, monotonic until reset
    pub score: u32,
    /// Best score across runs; survives reset
    pub high_score: u32,
    /// 1.0 on game over, decays linearly to 0
    pub camera_shake: f32,
    pub board: BoardState,
    pub player: PlayerState,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run. `high_score` comes from the persistence
    /// collaborator at startup.
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let board = BoardState::new(&mut rng);
        Self {
            seed,
            status: GameStatus::Running,
            score: 0,
            high_score,
            camera_shake: 0.0,
            board,
            player: PlayerState::default(),
            rng,
            events: Vec::new(),
        }
    }

    /// Queue a move if the whole queue plus this move lands somewhere legal.
    /// Invalid moves are dropped without touching the queue; the return value
    /// reports acceptance.
    pub fn enqueue_move(&mut self, direction: Direction) -> bool {
        let start = movement::Position {
            row: self.player.current_row,
            tile: self.player.current_tile,
        };
        let moves = self
            .player
            .moves_queue
            .iter()
            .copied()
            .chain(std::iter::once(direction));
        let valid = movement::ends_up_in_valid_position(start, moves, &self.board);
        if valid {
            self.player.moves_queue.push_back(direction);
        }
        valid
    }

    /// Toggle Running <-> Paused. No-op once the run is over.
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                self.events.push(GameEvent::Paused);
            }
            GameStatus::Paused => self.status = GameStatus::Running,
            GameStatus::Over => {}
        }
    }

    /// Start a new run on a fresh board. The high score is kept.
    pub fn reset(&mut self) {
        self.board.reset(&mut self.rng);
        self.player = PlayerState::default();
        self.status = GameStatus::Running;
        self.score = 0;
        self.camera_shake = 0.0;
    }

    /// Current difficulty level as derived from the score
    pub fn difficulty_level(&self) -> u32 {
        difficulty::difficulty_level(self.score)
    }

    /// World-space player position, interpolated mid-step
    pub fn player_world_position(&self) -> Vec2 {
        movement::interpolated_position(&self.player)
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
