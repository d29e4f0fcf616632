//! Move validation and step interpolation
//!
//! A queued move is legal when the whole queue, replayed from the current
//! grid cell, lands inside the board and off any tree. Lanes never block a
//! move; vehicles are handled by collision, not validation.

use glam::Vec2;

use super::board::BoardState;
use super::state::{Direction, PlayerState, Row};
use crate::consts::*;

/// A grid position. Rows can go hypothetically negative while folding a
/// queue; validation rejects those end states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: i32,
    pub tile: i32,
}

/// Replay a sequence of moves from a starting position
pub fn calculate_final_position(
    start: Position,
    moves: impl IntoIterator<Item = Direction>,
) -> Position {
    moves.into_iter().fold(start, |pos, direction| Position {
        row: pos.row + direction.row_delta(),
        tile: pos.tile + direction.tile_delta(),
    })
}

/// Whether replaying `moves` from `start` ends on a passable cell. Steps move
/// one cell at a time, so an illegal end state can only sit exactly one past
/// a bound.
pub fn ends_up_in_valid_position(
    start: Position,
    moves: impl IntoIterator<Item = Direction>,
    board: &BoardState,
) -> bool {
    let end = calculate_final_position(start, moves);

    if end.row == -1
        || end.tile == MIN_TILE_INDEX - 1
        || end.tile == MAX_TILE_INDEX + 1
    {
        return false;
    }

    if let Some(Row::Forest { trees }) = board.row_at(end.row) {
        if trees.iter().any(|tree| tree.tile_index == end.tile) {
            return false;
        }
    }

    true
}

/// World-space player position, linearly interpolated from the current cell
/// toward the front-of-queue target over `STEP_TIME`
pub fn interpolated_position(player: &PlayerState) -> Vec2 {
    let start = crate::grid_to_world(player.current_tile, player.current_row);
    let Some(&direction) = player.moves_queue.front() else {
        return start;
    };
    let end = crate::grid_to_world(
        player.current_tile + direction.tile_delta(),
        player.current_row + direction.row_delta(),
    );
    let progress = (player.step_elapsed / STEP_TIME).min(1.0);
    start.lerp(end, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Tree, TreeHeight};
    use proptest::prelude::*;

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Forward),
            Just(Direction::Backward),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn final_position_equals_summed_deltas(
            row in -20i32..50,
            tile in -20i32..20,
            moves in prop::collection::vec(direction_strategy(), 0..32),
        ) {
            let end = calculate_final_position(
                Position { row, tile },
                moves.iter().copied(),
            );
            let row_sum: i32 = moves.iter().map(|d| d.row_delta()).sum();
            let tile_sum: i32 = moves.iter().map(|d| d.tile_delta()).sum();
            prop_assert_eq!(end.row, row + row_sum);
            prop_assert_eq!(end.tile, tile + tile_sum);
        }
    }

    fn board_with_tree_at(row_slot: usize, tile: i32) -> BoardState {
        let mut rows = vec![Row::Forest { trees: vec![] }; 20];
        rows[row_slot] = Row::Forest {
            trees: vec![Tree {
                tile_index: tile,
                height: TreeHeight::Mid,
            }],
        };
        BoardState::from_rows(rows)
    }

    #[test]
    fn test_tree_blocks_target_cell() {
        // Tree on row 1, tile 0: forward from the start is blocked
        let board = board_with_tree_at(0, 0);
        let start = Position { row: 0, tile: 0 };
        assert!(!ends_up_in_valid_position(
            start,
            [Direction::Forward],
            &board
        ));
        // Stepping around it is fine
        assert!(ends_up_in_valid_position(
            start,
            [Direction::Right, Direction::Forward],
            &board
        ));
    }

    #[test]
    fn test_lane_rows_never_block() {
        use crate::sim::state::{Lane, Vehicle, VehicleKind};
        let mut rows = vec![Row::Forest { trees: vec![] }; 20];
        rows[0] = Row::Lane(Lane {
            kind: VehicleKind::Car,
            direction: true,
            speed: 125.0,
            vehicles: vec![Vehicle::new(0, 0xa52523)],
        });
        let board = BoardState::from_rows(rows);
        // Straight into the vehicle's tile: validation does not care
        assert!(ends_up_in_valid_position(
            Position { row: 0, tile: 0 },
            [Direction::Forward],
            &board
        ));
    }

    #[test]
    fn test_edges_reject_exactly_one_past() {
        let board = BoardState::from_rows(vec![Row::Forest { trees: vec![] }; 20]);
        let at_left_edge = Position {
            row: 0,
            tile: MIN_TILE_INDEX,
        };
        assert!(!ends_up_in_valid_position(
            at_left_edge,
            [Direction::Left],
            &board
        ));
        let at_right_edge = Position {
            row: 0,
            tile: MAX_TILE_INDEX,
        };
        assert!(!ends_up_in_valid_position(
            at_right_edge,
            [Direction::Right],
            &board
        ));
        assert!(!ends_up_in_valid_position(
            Position { row: 0, tile: 0 },
            [Direction::Backward],
            &board
        ));
    }

    #[test]
    fn test_interpolated_position_midstep() {
        let mut player = PlayerState::default();
        assert_eq!(interpolated_position(&player), Vec2::ZERO);

        player.moves_queue.push_back(Direction::Forward);
        player.step_elapsed = STEP_TIME / 2.0;
        let pos = interpolated_position(&player);
        assert_eq!(pos.x, 0.0);
        assert!((pos.y - TILE_SIZE / 2.0).abs() < 1e-4);

        // Progress clamps at the target cell
        player.step_elapsed = STEP_TIME * 3.0;
        assert!((interpolated_position(&player).y - TILE_SIZE).abs() < 1e-4);
    }
}
