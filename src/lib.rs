//! Cipher Road - an endless road-hopper arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (row generation, movement, collisions, game state)
//! - `input`: Raw platform events to game intents
//! - `persistence`: Key-value storage boundary for scores and settings
//! - `highscores`: Best-score tracking
//! - `settings`: Player preferences

pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use persistence::{KeyValueStore, MemoryStore};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Leftmost playable tile
    pub const MIN_TILE_INDEX: i32 = -8;
    /// Rightmost playable tile
    pub const MAX_TILE_INDEX: i32 = 8;
    /// Playable tiles per row
    pub const TILES_PER_ROW: i32 = MAX_TILE_INDEX - MIN_TILE_INDEX + 1;
    /// World-space width/depth of one tile (pixels)
    pub const TILE_SIZE: f32 = 42.0;

    /// Seconds a single grid step takes
    pub const STEP_TIME: f32 = 0.2;

    /// Rows generated per batch (initial board and each growth)
    pub const INITIAL_ROWS: usize = 20;
    /// Grow the board when the player is this many rows from the end
    pub const SAFE_ROWS_AHEAD: usize = 10;

    /// Base vehicle speeds (pixels per second)
    pub const VEHICLE_SPEEDS: [f32; 3] = [125.0, 156.0, 188.0];
    /// Vehicle colors (RGB)
    pub const VEHICLE_COLORS: [u32; 3] = [0xa52523, 0xbdb638, 0x78b14b];

    /// Percent speed gain per difficulty level
    pub const SPEED_INCREASE_PER_LEVEL: f32 = 20.0;
    /// Rows advanced per difficulty level
    pub const LEVEL_UP_EVERY_ROWS: u32 = 10;
    /// Speed never exceeds base * this
    pub const MAX_SPEED_MULTIPLIER: f32 = 2.5;
    /// Truck lanes never drop below this many vehicles
    pub const MIN_VEHICLES_PER_LANE: u32 = 2;
    /// No lane holds more than this many vehicles
    pub const MAX_VEHICLES_PER_LANE: u32 = 5;
    /// Base vehicles in a car lane
    pub const CARS_PER_LANE: u32 = 3;
    /// Base vehicles in a truck lane
    pub const TRUCKS_PER_LANE: u32 = 2;

    /// Trees placed in a forest row
    pub const TREES_PER_FOREST: usize = 4;

    /// Bound on rejection-sampling draws for a single placement.
    /// A truck lane at high difficulty can ask for more disjoint footprints
    /// than 17 tiles hold; exhaustion keeps the row short instead of looping.
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

    /// Tiles beyond which renderers may cull vehicles. Logical collision
    /// ignores this; it is exported for the presentation layer.
    pub const VEHICLE_VISIBILITY_DISTANCE: i32 = 15;

    /// Camera shake units shed per second after game over
    pub const CAMERA_SHAKE_DECAY: f32 = 3.0;

    /// Player body half-extent (14x14 footprint)
    pub const PLAYER_HALF_EXTENT: f32 = 7.0;
    /// Car hull: 60 long, 30 wide
    pub const CAR_HALF_LENGTH: f32 = 30.0;
    /// Car half-width
    pub const CAR_HALF_WIDTH: f32 = 15.0;
    /// Truck hull: cargo plus cab, 100 long, 35 wide
    pub const TRUCK_HALF_LENGTH: f32 = 50.0;
    /// Truck half-width
    pub const TRUCK_HALF_WIDTH: f32 = 17.5;
}

/// World-space x of a tile center
#[inline]
pub fn tile_to_world(tile: i32) -> f32 {
    tile as f32 * consts::TILE_SIZE
}

/// World-space y of a row center
#[inline]
pub fn row_to_world(row: i32) -> f32 {
    row as f32 * consts::TILE_SIZE
}

/// World-space grid position `(x, y)` for a tile/row pair
#[inline]
pub fn grid_to_world(tile: i32, row: i32) -> Vec2 {
    Vec2::new(tile_to_world(tile), row_to_world(row))
}

/// Vehicle travel span: the playable range inflated by two tiles on each
/// side. Vehicles wrap from one bound to the other.
#[inline]
pub fn lane_span() -> (f32, f32) {
    (
        tile_to_world(consts::MIN_TILE_INDEX - 2),
        tile_to_world(consts::MAX_TILE_INDEX + 2),
    )
}
