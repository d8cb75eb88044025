use std::time::Instant;

use tactile_geometry::Point;

/// Identifies one contact within a session: a finger by its platform identifier, or the
/// single synthetic mouse contact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContactId {
    Mouse,
    Touch(u64),
}

/// One finger or mouse contact at a moment in time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContactPoint {
    pub id: ContactId,
    pub pos: Point,
    pub time: Instant,
}

impl ContactPoint {
    pub fn new(id: ContactId, pos: Point, time: Instant) -> Self {
        Self { id, pos, time }
    }
}
