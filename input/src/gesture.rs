use std::time::Duration;

use tactile_geometry::Vector;

use crate::{ContactPoint, RawEvent};

/// The four cardinal swipe directions, in screen coordinates (positive x is right,
/// positive y is down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// The dominant axis of `displacement`, signed by the direction of travel. The vertical
    /// axis wins ties; the zero vector maps to `Up`.
    pub fn of(displacement: Vector) -> Self {
        use SwipeDirection::*;
        if displacement.x.abs() > displacement.y.abs() {
            if displacement.x > 0.0 { Right } else { Left }
        } else if displacement.y > 0.0 {
            Down
        } else {
            Up
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Swipe(SwipeDirection),
    Tap,
    DoubleTap,
    LongPress,
    /// Reserved. Multi-finger geometry is not classified; no event of this kind is ever
    /// produced.
    Pinch,
}

/// A recognized interaction, handed to a callback and not retained.
#[derive(Debug, Clone)]
pub struct GestureEvent {
    pub kind: GestureKind,
    /// Net displacement of the first tracked contact.
    pub displacement: Vector,
    /// In pixels per millisecond.
    pub velocity: Vector,
    /// Elapsed time since the session began.
    pub duration: Duration,
    /// Last known position of every tracked contact, in press order.
    pub contacts: Vec<ContactPoint>,
    /// The platform event that produced this gesture. `None` for a long press fired from a
    /// tick, which has no originating event.
    pub raw: Option<RawEvent>,
}

#[cfg(test)]
mod tests {
    use super::SwipeDirection::*;
    use super::*;
    use tactile_geometry::Point;

    #[test]
    fn direction_follows_the_dominant_axis() {
        assert_eq!(SwipeDirection::of(Point::new(100.0, 20.0)), Right);
        assert_eq!(SwipeDirection::of(Point::new(-100.0, 20.0)), Left);
        assert_eq!(SwipeDirection::of(Point::new(10.0, 80.0)), Down);
        assert_eq!(SwipeDirection::of(Point::new(-10.0, -80.0)), Up);
    }

    #[test]
    fn ties_and_zero_resolve_vertically() {
        assert_eq!(SwipeDirection::of(Point::new(50.0, 50.0)), Down);
        assert_eq!(SwipeDirection::of(Point::new(50.0, -50.0)), Up);
        assert_eq!(SwipeDirection::of(Point::default()), Up);
    }
}
