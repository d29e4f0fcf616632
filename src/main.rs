//! Cipher Road entry point
//!
//! Headless demo: a bot hops forward through traffic until it gets hit,
//! logging events along the way. Useful as a smoke run and as a reference
//! for wiring a real render loop.

use cipher_road::sim::{self, Direction, GameEvent, GameState, GameStatus};
use cipher_road::{MemoryStore, Settings, highscores};

/// Frame delta for the demo loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on immortal bots after this much simulated time
const MAX_RUN_SECONDS: f32 = 300.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut store = MemoryStore::new();
    let settings = Settings::load(&store);
    let best = highscores::load(&store);
    let mut game = GameState::new(seed, best);
    log::info!("cipher-road demo starting (seed {seed})");

    let mut elapsed = 0.0;
    while game.status != GameStatus::Over && elapsed < MAX_RUN_SECONDS {
        if game.player.moves_queue.is_empty() {
            hop(&mut game);
        }
        sim::tick(&mut game, &mut store, FRAME_DT);
        elapsed += FRAME_DT;

        for event in game.drain_events() {
            match event {
                GameEvent::ScoreIncreased(score) => {
                    log::info!("score {score} (level {})", game.difficulty_level() + 1);
                }
                GameEvent::GameOver { score } => {
                    log::info!("splat after {elapsed:.1}s at score {score}");
                }
                GameEvent::Moved(_) | GameEvent::Paused => {}
            }
        }
    }

    if settings.effective_camera_shake() {
        // Let the shake run out like a real frontend would
        while game.camera_shake > 0.0 {
            sim::tick(&mut game, &mut store, FRAME_DT);
        }
    }

    println!(
        "final score: {} (high score {}, {:.0}s, seed {})",
        game.score,
        game.high_score,
        elapsed.min(MAX_RUN_SECONDS),
        game.seed
    );
}

/// Hop forward when the way is clear, sidestep when a tree blocks it. Every
/// candidate goes through queue validation; the first accepted move wins.
fn hop(game: &mut GameState) {
    for direction in [Direction::Forward, Direction::Left, Direction::Right] {
        if game.enqueue_move(direction) {
            return;
        }
    }
}
