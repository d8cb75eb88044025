//! Release-time gesture detection over the session's derived quantities. Pure functions so
//! the decision logic is testable without a platform.

use std::time::Duration;

use tactile_geometry::Vector;

use crate::{GestureConfig, SwipeDirection};

/// A swipe: either the displacement or the velocity crossed its threshold.
pub fn swipe(
    displacement: Vector,
    velocity: Vector,
    config: &GestureConfig,
) -> Option<SwipeDirection> {
    (displacement.length() > config.swipe_distance || velocity.length() > config.swipe_velocity)
        .then(|| SwipeDirection::of(displacement))
}

/// A tap candidate: barely moved and released quickly. Whether it becomes a tap or a double
/// tap is decided by the recognizer's tap history.
pub fn tap(displacement: Vector, duration: Duration, config: &GestureConfig) -> bool {
    displacement.length() < config.swipe_distance && duration < config.tap_duration
}

#[cfg(test)]
mod tests {
    use tactile_geometry::Point;

    use super::*;

    fn config() -> GestureConfig {
        GestureConfig::default()
    }

    #[test]
    fn distance_alone_makes_a_swipe() {
        let direction = swipe(Point::new(60.0, 0.0), Point::default(), &config());
        assert_eq!(direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn velocity_alone_makes_a_swipe() {
        // 40 px in 40 ms: below the distance threshold, above the velocity threshold.
        let direction = swipe(Point::new(40.0, 0.0), Point::new(1.0, 0.0), &config());
        assert_eq!(direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn slow_short_movement_is_neither() {
        let displacement = Point::new(5.0, 5.0);
        let velocity = Point::new(0.01, 0.01);
        assert_eq!(swipe(displacement, velocity, &config()), None);
        assert!(tap(displacement, Duration::from_millis(120), &config()));
        // Too slow for a tap as well once past the time threshold.
        assert!(!tap(displacement, Duration::from_millis(400), &config()));
    }

    #[test]
    fn thresholds_are_exclusive() {
        let config = config();
        assert_eq!(
            swipe(Point::new(50.0, 0.0), Point::new(0.3, 0.0), &config),
            None
        );
        assert!(!tap(
            Point::new(50.0, 0.0),
            Duration::from_millis(100),
            &config
        ));
    }
}
