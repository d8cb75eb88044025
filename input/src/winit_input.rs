//! Winit boundary: converts window events into [`RawEvent`]s.

use std::{collections::HashMap, time::Instant};

use tactile_geometry::Point;
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceId, ElementState, MouseButton, TouchPhase, WindowEvent},
    window::WindowId,
};

use crate::{Button, ButtonState, Phase, PointerInput, RawEvent, SurfaceId};

impl From<WindowId> for SurfaceId {
    fn from(id: WindowId) -> Self {
        u64::from(id).into()
    }
}

/// Converts winit window events into raw pointer events.
///
/// Mouse button events carry no position, so the adapter keeps the last cursor position
/// per device; a button event that arrives before any cursor position is dropped, the same
/// way the recognizer drops anything it cannot place.
#[derive(Debug, Default)]
pub struct WinitPointerAdapter {
    cursors: HashMap<DeviceId, Point>,
}

impl WinitPointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_event(
        &mut self,
        window: WindowId,
        event: &WindowEvent,
        time: Instant,
    ) -> Option<RawEvent> {
        let input = match *event {
            WindowEvent::CursorMoved {
                device_id,
                position,
                ..
            } => {
                let pos = to_point(position);
                self.cursors.insert(device_id, pos);
                Some(PointerInput::CursorMoved { pos })
            }
            WindowEvent::CursorLeft { device_id } => self
                .cursors
                .remove(&device_id)
                .map(|pos| PointerInput::CursorLeft { pos }),
            WindowEvent::MouseInput {
                device_id,
                state,
                button,
                ..
            } => self
                .cursors
                .get(&device_id)
                .map(|&pos| PointerInput::MouseInput {
                    button: to_button(button),
                    state: to_button_state(state),
                    pos,
                }),
            WindowEvent::Touch(touch) => Some(PointerInput::Touch {
                id: touch.id,
                phase: to_phase(touch.phase),
                pos: to_point(touch.location),
            }),
            _ => None,
        };

        input.map(|input| RawEvent::new(window, time, input))
    }
}

fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x, position.y)
}

fn to_phase(phase: TouchPhase) -> Phase {
    match phase {
        TouchPhase::Started => Phase::Began,
        TouchPhase::Moved => Phase::Moved,
        TouchPhase::Ended => Phase::Ended,
        TouchPhase::Cancelled => Phase::Cancelled,
    }
}

fn to_button_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

fn to_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
        MouseButton::Back => Button::Back,
        MouseButton::Forward => Button::Forward,
        MouseButton::Other(n) => Button::Other(n),
    }
}
