//! Key and swipe translation.
//!
//! These are pure mappings from raw input data to a direction; the DOM event
//! plumbing lives in `lib.rs` and both paths feed the same `Game::steer`,
//! which enforces the anti-reversal rule.

use crate::game::Direction;

/// Minimum dominant-axis displacement for a touch to count as a swipe.
/// Anything smaller on both axes is a tap and is ignored.
pub const SWIPE_MIN_PX: f64 = 20.0;

/// Arrow keys and WASD. Unrecognized keys are a no-op.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Classifies a touch displacement. The larger-magnitude axis decides the
/// direction (ties go horizontal), and it must move more than `SWIPE_MIN_PX`.
pub fn direction_for_swipe(dx: f64, dy: f64) -> Option<Direction> {
    if dx.abs() >= dy.abs() {
        if dx.abs() > SWIPE_MIN_PX {
            return Some(if dx > 0.0 { Direction::Right } else { Direction::Left });
        }
    } else if dy.abs() > SWIPE_MIN_PX {
        return Some(if dy > 0.0 { Direction::Down } else { Direction::Up });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_cardinals() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn wasd_maps_in_both_cases() {
        assert_eq!(direction_for_key("w"), Some(Direction::Up));
        assert_eq!(direction_for_key("A"), Some(Direction::Left));
        assert_eq!(direction_for_key("s"), Some(Direction::Down));
        assert_eq!(direction_for_key("D"), Some(Direction::Right));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(direction_for_key("Enter"), None);
        assert_eq!(direction_for_key(" "), None);
        assert_eq!(direction_for_key("x"), None);
    }

    #[test]
    fn swipes_follow_the_dominant_axis() {
        assert_eq!(direction_for_swipe(60.0, 10.0), Some(Direction::Right));
        assert_eq!(direction_for_swipe(-45.0, 20.0), Some(Direction::Left));
        assert_eq!(direction_for_swipe(5.0, 33.0), Some(Direction::Down));
        assert_eq!(direction_for_swipe(-12.0, -80.0), Some(Direction::Up));
    }

    #[test]
    fn taps_below_the_threshold_are_ignored() {
        assert_eq!(direction_for_swipe(0.0, 0.0), None);
        assert_eq!(direction_for_swipe(12.0, -9.0), None);
        assert_eq!(direction_for_swipe(-19.9, 15.0), None);
        // Exactly at the threshold still counts as a tap.
        assert_eq!(direction_for_swipe(20.0, 0.0), None);
    }

    #[test]
    fn diagonal_ties_resolve_horizontally() {
        assert_eq!(direction_for_swipe(25.0, 25.0), Some(Direction::Right));
        assert_eq!(direction_for_swipe(-25.0, -25.0), Some(Direction::Left));
    }
}
