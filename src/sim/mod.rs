//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only, no wall-clock reads
//! - Seeded RNG only
//! - Stable row/vehicle order (append-only board)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod difficulty;
pub mod generate;
pub mod movement;
pub mod state;
pub mod tick;

pub use board::BoardState;
pub use collision::{Aabb, player_bounds, vehicle_bounds};
pub use difficulty::{adjusted_speed, difficulty_level, vehicle_count};
pub use generate::{generate_row, generate_rows};
pub use movement::{Position, calculate_final_position, ends_up_in_valid_position};
pub use state::{
    Direction, GameEvent, GameState, GameStatus, Lane, PlayerState, Row, Tree, TreeHeight,
    Vehicle, VehicleKind,
};
pub use tick::tick;
