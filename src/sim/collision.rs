//! Collision detection between the player and lane occupants
//!
//! Everything is axis-aligned world-space boxes. Vehicles advance
//! continuously and wrap between the lane span bounds; the player box tracks
//! the interpolated mid-step pose, so a hop into traffic can end the run
//! before the step lands.

use glam::Vec2;

use super::board::BoardState;
use super::state::{Row, VehicleKind};
use crate::consts::*;

/// Axis-aligned world-space bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive overlap test: boxes that exactly touch intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Player bounds around a world-space center
pub fn player_bounds(center: Vec2) -> Aabb {
    Aabb::from_center_half_extents(center, Vec2::splat(PLAYER_HALF_EXTENT))
}

/// Bounds of a vehicle at world x in the lane at the given absolute row
/// index. Hulls are symmetric about the origin, so travel direction does not
/// change the box.
pub fn vehicle_bounds(x: f32, row_index: i32, kind: VehicleKind) -> Aabb {
    let center = Vec2::new(x, crate::row_to_world(row_index));
    Aabb::from_center_half_extents(center, Vec2::new(kind.half_length(), kind.half_width()))
}

/// Advance a vehicle by `speed * dt` in its travel direction, wrapping to
/// the opposite bound once past the lane span
pub fn advance_vehicle(x: f32, speed: f32, direction: bool, dt: f32) -> f32 {
    let (beginning_of_row, end_of_row) = crate::lane_span();
    if direction {
        if x > end_of_row {
            beginning_of_row
        } else {
            x + speed * dt
        }
    } else if x < beginning_of_row {
        end_of_row
    } else {
        x - speed * dt
    }
}

/// Whether any vehicle within one row of `current_row` overlaps the player
/// bounds. Rows outside the band are never consulted, whatever their
/// occupants are doing.
pub fn player_hit(board: &BoardState, current_row: i32, player: &Aabb) -> bool {
    for row_index in (current_row - 1)..=(current_row + 1) {
        let Some(Row::Lane(lane)) = board.row_at(row_index) else {
            continue;
        };
        for vehicle in &lane.vehicles {
            if vehicle_bounds(vehicle.x, row_index, lane.kind).intersects(player) {
                return true;
            }
        }
    }
    false
}
