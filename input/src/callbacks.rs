use std::fmt;

use crate::GestureEvent;

pub type GestureHandler = Box<dyn FnMut(&GestureEvent)>;

/// The output side of the recognizer. Every handler is optional; unbound handlers make the
/// corresponding gesture a silent no-op.
#[derive(Default)]
pub struct GestureCallbacks {
    /// Fired on every press-start.
    pub on_gesture_start: Option<GestureHandler>,
    /// Fired on every tracked move.
    pub on_gesture_move: Option<GestureHandler>,
    /// Fired when a released session classifies as a swipe.
    pub on_gesture_end: Option<GestureHandler>,
    pub on_tap: Option<GestureHandler>,
    pub on_double_tap: Option<GestureHandler>,
    pub on_long_press: Option<GestureHandler>,
    /// Reserved. Never invoked.
    pub on_pinch: Option<GestureHandler>,
}

impl GestureCallbacks {
    /// Merges handlers set in `patch` over the current ones; unset handlers stay bound.
    /// Allows runtime rebinding without re-attaching the recognizer.
    pub fn merge(&mut self, patch: GestureCallbacks) {
        let GestureCallbacks {
            on_gesture_start,
            on_gesture_move,
            on_gesture_end,
            on_tap,
            on_double_tap,
            on_long_press,
            on_pinch,
        } = patch;

        if on_gesture_start.is_some() {
            self.on_gesture_start = on_gesture_start
        }
        if on_gesture_move.is_some() {
            self.on_gesture_move = on_gesture_move
        }
        if on_gesture_end.is_some() {
            self.on_gesture_end = on_gesture_end
        }
        if on_tap.is_some() {
            self.on_tap = on_tap
        }
        if on_double_tap.is_some() {
            self.on_double_tap = on_double_tap
        }
        if on_long_press.is_some() {
            self.on_long_press = on_long_press
        }
        if on_pinch.is_some() {
            self.on_pinch = on_pinch
        }
    }

    pub(crate) fn gesture_start(&mut self, event: &GestureEvent) {
        if let Some(handler) = self.on_gesture_start.as_mut() {
            handler(event)
        }
    }

    pub(crate) fn gesture_move(&mut self, event: &GestureEvent) {
        if let Some(handler) = self.on_gesture_move.as_mut() {
            handler(event)
        }
    }

    pub(crate) fn gesture_end(&mut self, event: &GestureEvent) {
        if let Some(handler) = self.on_gesture_end.as_mut() {
            handler(event)
        }
    }

    pub(crate) fn tap(&mut self, event: &GestureEvent) {
        if let Some(handler) = self.on_tap.as_mut() {
            handler(event)
        }
    }

    pub(crate) fn double_tap(&mut self, event: &GestureEvent) {
        if let Some(handler) = self.on_double_tap.as_mut() {
            handler(event)
        }
    }

    pub(crate) fn long_press(&mut self, event: &GestureEvent) {
        if let Some(handler) = self.on_long_press.as_mut() {
            handler(event)
        }
    }
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |o: &Option<GestureHandler>| if o.is_some() { "bound" } else { "-" };
        f.debug_struct("GestureCallbacks")
            .field("on_gesture_start", &bound(&self.on_gesture_start))
            .field("on_gesture_move", &bound(&self.on_gesture_move))
            .field("on_gesture_end", &bound(&self.on_gesture_end))
            .field("on_tap", &bound(&self.on_tap))
            .field("on_double_tap", &bound(&self.on_double_tap))
            .field("on_long_press", &bound(&self.on_long_press))
            .field("on_pinch", &bound(&self.on_pinch))
            .finish()
    }
}
