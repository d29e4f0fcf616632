//! Input adapter
//!
//! Translates raw platform events (key names, swipe deltas) into the game
//! intents the simulation consumes. Platform layers own event plumbing and
//! thresholds; this module owns only the mapping.

use crate::sim::Direction;

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    TogglePause,
}

/// Map a browser/winit-style key name to an intent
pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowUp" => Some(Intent::Move(Direction::Forward)),
        "ArrowDown" => Some(Intent::Move(Direction::Backward)),
        "ArrowLeft" => Some(Intent::Move(Direction::Left)),
        "ArrowRight" => Some(Intent::Move(Direction::Right)),
        " " | "Space" | "Escape" => Some(Intent::TogglePause),
        _ => None,
    }
}

/// Map a swipe delta in screen coordinates (y grows downward) to a move
/// along its dominant axis. Swipes shorter than `threshold` on both axes
/// are ignored.
pub fn intent_for_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Intent> {
    if dx.abs() < threshold && dy.abs() < threshold {
        return None;
    }
    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 { Direction::Right } else { Direction::Left }
    } else if dy < 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };
    Some(Intent::Move(direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(
            intent_for_key("ArrowUp"),
            Some(Intent::Move(Direction::Forward))
        );
        assert_eq!(
            intent_for_key("ArrowDown"),
            Some(Intent::Move(Direction::Backward))
        );
        assert_eq!(
            intent_for_key("ArrowLeft"),
            Some(Intent::Move(Direction::Left))
        );
        assert_eq!(
            intent_for_key("ArrowRight"),
            Some(Intent::Move(Direction::Right))
        );
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(intent_for_key(" "), Some(Intent::TogglePause));
        assert_eq!(intent_for_key("Escape"), Some(Intent::TogglePause));
        assert_eq!(intent_for_key("KeyW"), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        assert_eq!(
            intent_for_swipe(50.0, 10.0, 30.0),
            Some(Intent::Move(Direction::Right))
        );
        assert_eq!(
            intent_for_swipe(-50.0, 10.0, 30.0),
            Some(Intent::Move(Direction::Left))
        );
        // Screen-up is forward
        assert_eq!(
            intent_for_swipe(10.0, -50.0, 30.0),
            Some(Intent::Move(Direction::Forward))
        );
        assert_eq!(
            intent_for_swipe(10.0, 50.0, 30.0),
            Some(Intent::Move(Direction::Backward))
        );
    }

    #[test]
    fn test_short_swipe_ignored() {
        assert_eq!(intent_for_swipe(5.0, -5.0, 30.0), None);
    }
}
