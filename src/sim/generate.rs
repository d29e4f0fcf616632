//! Procedural row generation
//!
//! Row type is uniform over car/truck/forest; lane speed and vehicle count
//! scale with the difficulty level of the row's absolute index. All placement
//! runs through rejection sampling over the tile range, bounded by
//! `MAX_PLACEMENT_ATTEMPTS` so a crowded lane degrades to fewer vehicles
//! instead of spinning.

use std::collections::HashSet;

use rand::Rng;
use rand_pcg::Pcg32;

use super::difficulty::{adjusted_speed, difficulty_level, vehicle_count};
use super::state::{Lane, Row, Tree, TreeHeight, Vehicle, VehicleKind};
use crate::consts::*;

/// Generate `amount` rows for absolute indices `starting_row..`, each at the
/// difficulty of its own index. Later batches are born harder even before
/// the player reaches them.
pub fn generate_rows(amount: usize, starting_row: usize, rng: &mut Pcg32) -> Vec<Row> {
    (0..amount)
        .map(|i| generate_row(difficulty_level((starting_row + i) as u32), rng))
        .collect()
}

/// Generate a single row at the given difficulty level
pub fn generate_row(level: u32, rng: &mut Pcg32) -> Row {
    match rng.random_range(0..3) {
        0 => generate_lane(VehicleKind::Car, level, rng),
        1 => generate_lane(VehicleKind::Truck, level, rng),
        _ => generate_forest(rng),
    }
}

fn generate_forest(rng: &mut Pcg32) -> Row {
    let mut occupied = HashSet::new();
    let mut trees = Vec::with_capacity(TREES_PER_FOREST);
    for _ in 0..TREES_PER_FOREST {
        let Some(tile_index) = sample_disjoint_tile(&mut occupied, 0, rng) else {
            break;
        };
        let height = TreeHeight::ALL[rng.random_range(0..TreeHeight::ALL.len())];
        trees.push(Tree { tile_index, height });
    }
    Row::Forest { trees }
}

fn generate_lane(kind: VehicleKind, level: u32, rng: &mut Pcg32) -> Row {
    let direction = rng.random_bool(0.5);
    let base_speed = VEHICLE_SPEEDS[rng.random_range(0..VEHICLE_SPEEDS.len())];
    let speed = adjusted_speed(base_speed, level);
    let count = vehicle_count(kind, level);

    let mut occupied = HashSet::new();
    let mut vehicles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let radius = kind.footprint_radius();
        let Some(initial_tile_index) = sample_disjoint_tile(&mut occupied, radius, rng) else {
            break;
        };
        let color = VEHICLE_COLORS[rng.random_range(0..VEHICLE_COLORS.len())];
        vehicles.push(Vehicle::new(initial_tile_index, color));
    }

    Row::Lane(Lane {
        kind,
        direction,
        speed,
        vehicles,
    })
}

/// Draw tiles until one whose footprint (center +/- radius) misses every
/// occupied tile, then reserve the footprint. `None` once the attempts run
/// out.
fn sample_disjoint_tile(
    occupied: &mut HashSet<i32>,
    radius: i32,
    rng: &mut Pcg32,
) -> Option<i32> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let tile = rng.random_range(MIN_TILE_INDEX..=MAX_TILE_INDEX);
        let footprint = (tile - radius)..=(tile + radius);
        if footprint.clone().any(|t| occupied.contains(&t)) {
            continue;
        }
        occupied.extend(footprint);
        return Some(tile);
    }
    None
}
