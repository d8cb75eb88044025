use std::time::Duration;

/// Haptic pulse tiers: light for touch press-starts and single taps, medium for swipe ends
/// and double taps, heavy for long presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Light,
    Medium,
    Heavy,
}

const LIGHT: [Duration; 1] = [Duration::from_millis(10)];
const MEDIUM: [Duration; 1] = [Duration::from_millis(30)];
const HEAVY: [Duration; 3] = [
    Duration::from_millis(50),
    Duration::from_millis(10),
    Duration::from_millis(50),
];

impl Pulse {
    /// The vibration pattern for this pulse: alternating on / off durations, beginning with
    /// on.
    pub fn pattern(&self) -> &'static [Duration] {
        match self {
            Pulse::Light => &LIGHT,
            Pulse::Medium => &MEDIUM,
            Pulse::Heavy => &HEAVY,
        }
    }
}

/// A platform vibration capability, injected into the recognizer.
///
/// Pulses are fire-and-forget: implementations must not fail, and a recognizer without an
/// implementation silently skips feedback.
pub trait Haptics {
    fn pulse(&mut self, pulse: Pulse);
}
