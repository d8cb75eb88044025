use std::time::{Duration, Instant};

use tactile_geometry::{Point, Vector};

use crate::{ContactId, ContactPoint};

/// Movement beyond this distance from the press position disarms the long press. Finger
/// jitter below it does not count as a move.
pub(crate) const TOUCH_SLOP: f64 = 8.0;

#[derive(Debug, Clone)]
struct TrackedContact {
    /// Immutable snapshot of where and when the contact went down.
    start: ContactPoint,
    current: ContactPoint,
    released: bool,
}

impl TrackedContact {
    fn new(start: ContactPoint) -> Self {
        Self {
            start,
            current: start,
            released: false,
        }
    }
}

/// Everything between the first press and the release of the last contact.
///
/// Contacts are stored in press order; the first one drives the classification geometry.
/// Released contacts stay tracked so their last known position survives until the
/// release-time classification.
#[derive(Debug, Clone)]
pub(crate) struct GestureSession {
    started: Instant,
    contacts: Vec<(ContactId, TrackedContact)>,
    long_press: LongPress,
}

#[derive(Debug, Clone)]
struct LongPress {
    deadline: Option<Instant>,
    fired: bool,
}

impl GestureSession {
    pub fn new(contact: ContactPoint, long_press_after: Duration) -> Self {
        Self {
            started: contact.time,
            contacts: vec![(contact.id, TrackedContact::new(contact))],
            long_press: LongPress {
                deadline: Some(contact.time + long_press_after),
                fired: false,
            },
        }
    }

    /// Adds a contact to the session. Returns `false` if the contact limit is reached and
    /// the contact is not tracked.
    ///
    /// A press re-arms the long press deadline unless it already fired.
    pub fn press(
        &mut self,
        contact: ContactPoint,
        max_contacts: usize,
        long_press_after: Duration,
    ) -> bool {
        if let Some(tracked) = self.tracked_mut(contact.id) {
            // A second press of an already tracked id just refreshes its position.
            tracked.current = contact;
            tracked.released = false;
        } else {
            if self.active_contacts() >= max_contacts {
                return false;
            }
            self.contacts.push((contact.id, TrackedContact::new(contact)));
        }

        if !self.long_press.fired {
            self.long_press.deadline = Some(contact.time + long_press_after);
        }
        true
    }

    /// Updates the current position of a tracked contact. Returns `false` if the contact is
    /// not tracked by this session.
    pub fn moved(&mut self, id: ContactId, pos: Point, time: Instant) -> bool {
        let Some(tracked) = self.tracked_mut(id) else {
            return false;
        };
        if tracked.released {
            return false;
        }
        tracked.current = ContactPoint::new(id, pos, time);

        let moved = (tracked.current.pos - tracked.start.pos).length() > TOUCH_SLOP;
        if moved {
            self.disarm_long_press();
        }
        true
    }

    /// Releases a tracked contact, keeping its final position. Returns the number of
    /// contacts still active, or `None` if the contact was never tracked.
    pub fn release(&mut self, id: ContactId, pos: Point, time: Instant) -> Option<usize> {
        let tracked = self.tracked_mut(id)?;
        if tracked.released {
            return None;
        }
        tracked.current = ContactPoint::new(id, pos, time);
        tracked.released = true;
        self.disarm_long_press();
        Some(self.active_contacts())
    }

    pub fn active_contacts(&self) -> usize {
        self.contacts.iter().filter(|(_, c)| !c.released).count()
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Net displacement of the first tracked contact, from its press position to its last
    /// known position.
    pub fn displacement(&self) -> Vector {
        let primary = self.primary();
        primary.current.pos - primary.start.pos
    }

    /// Instantaneous velocity of the first tracked contact in pixels per millisecond. The
    /// elapsed time is floored at one millisecond.
    pub fn velocity(&self) -> Vector {
        let primary = self.primary();
        let elapsed = elapsed_ms(primary.current.time - primary.start.time);
        self.displacement() / elapsed
    }

    pub fn duration(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// The last known position of every tracked contact, in press order.
    pub fn contact_points(&self) -> Vec<ContactPoint> {
        self.contacts.iter().map(|(_, c)| c.current).collect()
    }

    /// The armed long press deadline. `None` once fired or disarmed.
    pub fn long_press_deadline(&self) -> Option<Instant> {
        self.long_press.deadline
    }

    /// Marks the long press as fired. It never fires again for this session.
    pub fn fire_long_press(&mut self) {
        self.long_press.deadline = None;
        self.long_press.fired = true;
    }

    fn disarm_long_press(&mut self) {
        self.long_press.deadline = None;
    }

    fn primary(&self) -> &TrackedContact {
        // A session exists iff at least one contact was tracked.
        &self.contacts[0].1
    }

    fn tracked_mut(&mut self, id: ContactId) -> Option<&mut TrackedContact> {
        self.contacts
            .iter_mut()
            .find_map(|(i, c)| (*i == id).then_some(c))
    }
}

fn elapsed_ms(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).max(1.0)
}
