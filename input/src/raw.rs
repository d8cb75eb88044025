use std::time::Instant;

use derive_more::{From, Into};
use tactile_geometry::Point;

use crate::contact::ContactId;

/// Identifies the surface a recognizer is attached to. Host windows map to this through
/// whatever id type their windowing layer uses (see the winit support module).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, From, Into)]
pub struct SurfaceId(u64);

/// A platform input event: which surface it happened on, when, and what kind of pointer
/// interaction it was.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub surface: SurfaceId,
    pub time: Instant,
    pub input: PointerInput,
}

impl RawEvent {
    pub fn new(surface: impl Into<SurfaceId>, time: Instant, input: PointerInput) -> Self {
        Self {
            surface: surface.into(),
            time,
            input,
        }
    }
}

/// The tagged raw input model. All three host input modalities are expressed here so that
/// everything behind the boundary stays platform-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// A finger contact from a touch screen, keyed by its platform identifier.
    Touch { id: u64, phase: Phase, pos: Point },
    /// The mouse cursor moved. Delivered with or without a button held.
    CursorMoved { pos: Point },
    /// The cursor left the tracking surface. Cancels an in-flight mouse gesture.
    CursorLeft { pos: Point },
    /// A mouse button changed state at the given cursor position.
    MouseInput {
        button: Button,
        state: ButtonState,
        pos: Point,
    },
    /// A unified pointer event from hosts that fold touch, mouse, and pen into one API.
    Pointer {
        kind: PointerKind,
        id: u64,
        phase: Phase,
        pos: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
    Pen,
}

/// The input modality a contact update originated from. Scroll prevention only applies to
/// touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Touch,
    Mouse,
}

/// The single per-contact state change a raw input reduces to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactUpdate {
    pub id: ContactId,
    pub modality: Modality,
    pub phase: Phase,
    pub pos: Point,
}

impl ContactUpdate {
    fn touch(id: u64, phase: Phase, pos: Point) -> Self {
        Self {
            id: ContactId::Touch(id),
            modality: Modality::Touch,
            phase,
            pos,
        }
    }

    fn mouse(phase: Phase, pos: Point) -> Self {
        Self {
            id: ContactId::Mouse,
            modality: Modality::Mouse,
            phase,
            pos,
        }
    }
}

impl PointerInput {
    /// Reduces the input to a contact update.
    ///
    /// `None` for modalities the recognizer does not handle (pen pointers); these fall
    /// through as no-ops.
    pub fn to_contact_update(&self) -> Option<ContactUpdate> {
        use PointerInput::*;
        match *self {
            Touch { id, phase, pos } => Some(ContactUpdate::touch(id, phase, pos)),
            CursorMoved { pos } => Some(ContactUpdate::mouse(Phase::Moved, pos)),
            CursorLeft { pos } => Some(ContactUpdate::mouse(Phase::Cancelled, pos)),
            MouseInput { state, pos, .. } => {
                let phase = match state {
                    ButtonState::Pressed => Phase::Began,
                    ButtonState::Released => Phase::Ended,
                };
                Some(ContactUpdate::mouse(phase, pos))
            }
            Pointer {
                kind: PointerKind::Touch,
                id,
                phase,
                pos,
            } => Some(ContactUpdate::touch(id, phase, pos)),
            Pointer {
                kind: PointerKind::Mouse,
                phase,
                pos,
                ..
            } => Some(ContactUpdate::mouse(phase, pos)),
            Pointer {
                kind: PointerKind::Pen,
                ..
            } => None,
        }
    }
}
