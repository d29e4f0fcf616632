//! Per-tick simulation advance
//!
//! Driven once per frame by the external render/timing loop with a variable
//! delta. Within a tick the order is fixed: step resolution (which may
//! complete a move, update the score and grow the board), vehicle advance,
//! collision. Paused freezes everything in place; Over only decays camera
//! shake.

use super::state::{GameEvent, GameState, GameStatus, Row};
use super::{collision, movement};
use crate::consts::*;
use crate::highscores;
use crate::persistence::KeyValueStore;

/// Advance the simulation by `dt` seconds. The store is the external
/// persistence collaborator, written when the high score rises.
pub fn tick(state: &mut GameState, store: &mut dyn KeyValueStore, dt: f32) {
    match state.status {
        GameStatus::Paused => return,
        GameStatus::Over => {
            state.camera_shake = (state.camera_shake - CAMERA_SHAKE_DECAY * dt).max(0.0);
            return;
        }
        GameStatus::Running => {}
    }

    resolve_step(state, store, dt);
    advance_vehicles(state, dt);
    check_collisions(state);
}

/// Accumulate step time and complete at most one move per tick
fn resolve_step(state: &mut GameState, store: &mut dyn KeyValueStore, dt: f32) {
    if state.player.moves_queue.is_empty() {
        return;
    }
    state.player.step_elapsed += dt;
    if state.player.step_elapsed < STEP_TIME {
        return;
    }
    state.player.step_elapsed = 0.0;
    complete_step(state, store);
}

fn complete_step(state: &mut GameState, store: &mut dyn KeyValueStore) {
    let Some(direction) = state.player.moves_queue.pop_front() else {
        return;
    };
    state.player.current_row += direction.row_delta();
    state.player.current_tile += direction.tile_delta();
    state.events.push(GameEvent::Moved(direction));

    // Grow exactly on the threshold; "==" keeps a re-entrant trigger from
    // appending twice before the length changes.
    let threshold = (state.board.len() - SAFE_ROWS_AHEAD) as i32;
    if state.player.current_row == threshold {
        state.board.add_rows(&mut state.rng);
        log::debug!("board grew to {} rows", state.board.len());
    }

    update_score(state, store);
}

fn update_score(state: &mut GameState, store: &mut dyn KeyValueStore) {
    let reached = state.player.current_row.max(0) as u32;
    if reached <= state.score {
        return;
    }
    state.score = reached;
    state.events.push(GameEvent::ScoreIncreased(reached));
    if state.score > state.high_score {
        state.high_score = state.score;
        highscores::save(store, state.high_score);
    }
}

fn advance_vehicles(state: &mut GameState, dt: f32) {
    for row in state.board.rows_mut() {
        let Row::Lane(lane) = row else { continue };
        for vehicle in &mut lane.vehicles {
            vehicle.x = collision::advance_vehicle(vehicle.x, lane.speed, lane.direction, dt);
        }
    }
}

fn check_collisions(state: &mut GameState) {
    let player = collision::player_bounds(movement::interpolated_position(&state.player));
    if collision::player_hit(&state.board, state.player.current_row, &player) {
        state.status = GameStatus::Over;
        state.camera_shake = 1.0;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("run over at score {}", state.score);
    }
}
