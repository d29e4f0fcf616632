//! Difficulty progression
//!
//! Pure functions, no state. The same formulas run at generation time (fed
//! the row's absolute index, so later rows are born harder) and at reporting
//! time (fed the current score).

use super::state::VehicleKind;
use crate::consts::*;

/// Difficulty level for a given progress value (rows advanced or score)
#[inline]
pub fn difficulty_level(rows: u32) -> u32 {
    rows / LEVEL_UP_EVERY_ROWS
}

/// Lane speed for a base speed at a difficulty level, capped at
/// `base * MAX_SPEED_MULTIPLIER`
pub fn adjusted_speed(base: f32, level: u32) -> f32 {
    let scaled = base * (1.0 + level as f32 * SPEED_INCREASE_PER_LEVEL / 100.0);
    scaled.min(base * MAX_SPEED_MULTIPLIER)
}

/// Vehicles to place in a lane of the given kind at a difficulty level
pub fn vehicle_count(kind: VehicleKind, level: u32) -> u32 {
    let count = (kind.base_count() + level / 2).min(MAX_VEHICLES_PER_LANE);
    match kind {
        VehicleKind::Truck => count.max(MIN_VEHICLES_PER_LANE),
        VehicleKind::Car => count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_steps_every_ten_rows() {
        assert_eq!(difficulty_level(0), 0);
        assert_eq!(difficulty_level(9), 0);
        assert_eq!(difficulty_level(10), 1);
        assert_eq!(difficulty_level(25), 2);
    }

    #[test]
    fn test_level_monotonic() {
        for n in 0..500 {
            assert!(difficulty_level(n + 1) >= difficulty_level(n));
        }
    }

    #[test]
    fn test_speed_monotonic_and_capped() {
        for &base in &VEHICLE_SPEEDS {
            let mut prev = adjusted_speed(base, 0);
            assert_eq!(prev, base);
            for level in 1..40 {
                let speed = adjusted_speed(base, level);
                assert!(speed >= prev);
                assert!(speed <= base * MAX_SPEED_MULTIPLIER + f32::EPSILON);
                prev = speed;
            }
        }
        // Cap binds from level 8 on: 1 + 8*0.2 = 2.6 > 2.5
        assert_eq!(
            adjusted_speed(125.0, 8),
            adjusted_speed(125.0, 100)
        );
    }

    #[test]
    fn test_vehicle_count_scaling() {
        assert_eq!(vehicle_count(VehicleKind::Car, 0), 3);
        assert_eq!(vehicle_count(VehicleKind::Car, 2), 4);
        assert_eq!(vehicle_count(VehicleKind::Car, 4), 5);
        // Capped
        assert_eq!(vehicle_count(VehicleKind::Car, 20), 5);
        // Trucks start at their floor
        assert_eq!(vehicle_count(VehicleKind::Truck, 0), 2);
        assert_eq!(vehicle_count(VehicleKind::Truck, 6), 5);
    }
}
