use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Classification thresholds and behavior switches.
///
/// Replaceable wholesale or patched at any time; a change takes effect on the next
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Displacement beyond which a release classifies as a swipe, in pixels.
    pub swipe_distance: f64,
    /// Velocity beyond which a release classifies as a swipe, in pixels per millisecond.
    pub swipe_velocity: f64,
    /// Releases quicker than this qualify as taps. Also the pairing window for double taps.
    pub tap_duration: Duration,
    /// How long a stationary contact must be held before the long press fires.
    pub long_press_duration: Duration,
    /// Contacts beyond this count are not tracked.
    pub max_contacts: usize,
    pub haptics: bool,
    /// When set, touch presses and moves are reported as consumed so the host suppresses
    /// scrolling.
    pub prevent_scroll: bool,
    /// Gates debug logging of state transitions and dropped classifications.
    pub debug: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_distance: 50.0,
            swipe_velocity: 0.3,
            tap_duration: Duration::from_millis(300),
            long_press_duration: Duration::from_millis(500),
            max_contacts: 2,
            haptics: true,
            prevent_scroll: true,
            debug: false,
        }
    }
}

/// A partial configuration update. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfigPatch {
    pub swipe_distance: Option<f64>,
    pub swipe_velocity: Option<f64>,
    pub tap_duration: Option<Duration>,
    pub long_press_duration: Option<Duration>,
    pub max_contacts: Option<usize>,
    pub haptics: Option<bool>,
    pub prevent_scroll: Option<bool>,
    pub debug: Option<bool>,
}

impl GestureConfig {
    pub fn apply(&mut self, patch: GestureConfigPatch) {
        let GestureConfigPatch {
            swipe_distance,
            swipe_velocity,
            tap_duration,
            long_press_duration,
            max_contacts,
            haptics,
            prevent_scroll,
            debug,
        } = patch;

        if let Some(v) = swipe_distance {
            self.swipe_distance = v
        }
        if let Some(v) = swipe_velocity {
            self.swipe_velocity = v
        }
        if let Some(v) = tap_duration {
            self.tap_duration = v
        }
        if let Some(v) = long_press_duration {
            self.long_press_duration = v
        }
        if let Some(v) = max_contacts {
            self.max_contacts = v
        }
        if let Some(v) = haptics {
            self.haptics = v
        }
        if let Some(v) = prevent_scroll {
            self.prevent_scroll = v
        }
        if let Some(v) = debug {
            self.debug = v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_changes_nothing() {
        let mut config = GestureConfig::default();
        config.apply(GestureConfigPatch::default());
        assert_eq!(config, GestureConfig::default());
    }

    #[test]
    fn patched_fields_replace_only_themselves() {
        let mut config = GestureConfig::default();
        config.apply(GestureConfigPatch {
            swipe_distance: Some(80.0),
            haptics: Some(false),
            ..Default::default()
        });

        assert_eq!(config.swipe_distance, 80.0);
        assert!(!config.haptics);
        assert_eq!(config.swipe_velocity, 0.3);
        assert_eq!(config.tap_duration, Duration::from_millis(300));
    }

    #[test]
    fn patch_deserializes_from_partial_input() {
        let patch: GestureConfigPatch =
            serde_json::from_str(r#"{ "swipe_distance": 75.0, "debug": true }"#).unwrap();
        assert_eq!(patch.swipe_distance, Some(75.0));
        assert_eq!(patch.debug, Some(true));
        assert_eq!(patch.tap_duration, None);
    }
}
