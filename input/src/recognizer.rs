use std::{fmt, time::Instant};

use log::debug;

use crate::{
    ContactPoint, ContactUpdate, GestureCallbacks, GestureConfig, GestureConfigPatch,
    GestureEvent, GestureKind, Haptics, Modality, Phase, Pulse, RawEvent, SurfaceId,
    SwipeDirection, classify, session::GestureSession,
};

/// What the recognizer did with a raw event.
///
/// `Consumed` asks the host to suppress its default handling of the event (scrolling);
/// everything else is `Ignored` and passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Consumed,
    Ignored,
}

/// Recognizes swipes, taps, double taps, and long presses on one attached surface.
///
/// Fed one [`RawEvent`] at a time, in the chronological order the host delivers them.
/// There is no failure mode: input that cannot contribute to a gesture is ignored.
pub struct GestureRecognizer {
    config: GestureConfig,
    callbacks: GestureCallbacks,
    haptics: Option<Box<dyn Haptics>>,
    attached: Option<SurfaceId>,
    enabled: bool,
    session: Option<GestureSession>,
    /// When the most recent single tap was classified; pairs the next tap into a double
    /// tap.
    last_tap: Option<Instant>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default(), GestureCallbacks::default())
    }
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig, callbacks: GestureCallbacks) -> Self {
        Self {
            config,
            callbacks,
            haptics: None,
            attached: None,
            enabled: true,
            session: None,
            last_tap: None,
        }
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Some(Box::new(haptics));
        self
    }

    /// Attaches to a surface. Attaching while already attached is a silent replace: the
    /// previous attachment is torn down first, discarding any in-flight session.
    pub fn attach(&mut self, surface: impl Into<SurfaceId>) {
        self.cancel_session();
        self.attached = Some(surface.into());
    }

    /// Detaches from the current surface, discarding any in-flight session without
    /// classification.
    pub fn detach(&mut self) {
        self.cancel_session();
        self.attached = None;
    }

    pub fn attached(&self) -> Option<SurfaceId> {
        self.attached
    }

    /// While disabled, all input is ignored. Disabling mid-gesture discards the session;
    /// re-enabling starts clean.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel_session();
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn update_config(&mut self, patch: GestureConfigPatch) {
        self.config.apply(patch);
    }

    pub fn update_callbacks(&mut self, patch: GestureCallbacks) {
        self.callbacks.merge(patch);
    }

    /// The armed long press deadline, if any. Hosts use this to schedule a wakeup that
    /// calls [`tick`](Self::tick).
    pub fn long_press_deadline(&self) -> Option<Instant> {
        self.session.as_ref()?.long_press_deadline()
    }

    /// Fires a due long press. Safe to call at any time and with any `now`; does nothing
    /// unless a session is active and its armed deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        self.fire_due_long_press(now, None);
    }

    /// Processes one platform event.
    pub fn process(&mut self, event: &RawEvent) -> EventResponse {
        if !self.enabled || self.attached != Some(event.surface) {
            return EventResponse::Ignored;
        }
        let Some(update) = event.input.to_contact_update() else {
            self.debug(format_args!("unsupported input, ignoring: {:?}", event.input));
            return EventResponse::Ignored;
        };

        // A long press that came due before this event fires first, stamped with its
        // deadline rather than the event time.
        self.fire_due_long_press(event.time, Some(event));

        match update.phase {
            Phase::Began => self.press(event, update),
            Phase::Moved => self.moved(event, update),
            Phase::Ended => self.release(event, update),
            Phase::Cancelled => {
                self.cancel_session();
                EventResponse::Ignored
            }
        }
    }

    fn press(&mut self, event: &RawEvent, update: ContactUpdate) -> EventResponse {
        let contact = ContactPoint::new(update.id, update.pos, event.time);

        if let Some(session) = self.session.as_mut() {
            if !session.press(contact, self.config.max_contacts, self.config.long_press_duration) {
                self.debug(format_args!("contact limit reached, not tracking {:?}", update.id));
                return self.scroll_response(&update);
            }
        } else {
            self.session = Some(GestureSession::new(contact, self.config.long_press_duration));
        }

        // Only finger presses pulse; mouse buttons give their own physical feedback.
        if update.modality == Modality::Touch {
            self.pulse(Pulse::Light);
        }
        if let Some(session) = self.session.as_ref() {
            let gesture = Self::session_event(session, event);
            self.callbacks.gesture_start(&gesture);
        }
        self.scroll_response(&update)
    }

    fn moved(&mut self, event: &RawEvent, update: ContactUpdate) -> EventResponse {
        let Some(session) = self.session.as_mut() else {
            // A cursor hovering without a pressed button, or a move after a cancel.
            return EventResponse::Ignored;
        };
        if !session.moved(update.id, update.pos, event.time) {
            return EventResponse::Ignored;
        }

        let gesture = Self::session_event(session, event);
        self.callbacks.gesture_move(&gesture);
        self.scroll_response(&update)
    }

    fn release(&mut self, event: &RawEvent, update: ContactUpdate) -> EventResponse {
        let Some(session) = self.session.as_mut() else {
            return EventResponse::Ignored;
        };
        match session.release(update.id, update.pos, event.time) {
            None => {}
            Some(0) => {
                if let Some(session) = self.session.take() {
                    self.classify(&session, event);
                }
            }
            Some(_) => {}
        }
        EventResponse::Ignored
    }

    /// Runs the release-time classification once the last contact is up.
    fn classify(&mut self, session: &GestureSession, event: &RawEvent) {
        let displacement = session.displacement();
        let velocity = session.velocity();
        let duration = session.duration(event.time);

        if let Some(direction) = classify::swipe(displacement, velocity, &self.config) {
            self.pulse(Pulse::Medium);
            let gesture = GestureEvent {
                kind: GestureKind::Swipe(direction),
                displacement,
                velocity,
                duration,
                contacts: session.contact_points(),
                raw: Some(event.clone()),
            };
            self.callbacks.gesture_end(&gesture);
            return;
        }

        if classify::tap(displacement, duration, &self.config) {
            let kind = self.disambiguate_tap(event.time);
            let pulse = match kind {
                GestureKind::DoubleTap => Pulse::Medium,
                _ => Pulse::Light,
            };
            self.pulse(pulse);
            let gesture = GestureEvent {
                kind,
                displacement,
                velocity,
                duration,
                contacts: session.contact_points(),
                raw: Some(event.clone()),
            };
            match kind {
                GestureKind::DoubleTap => self.callbacks.double_tap(&gesture),
                _ => self.callbacks.tap(&gesture),
            }
            return;
        }

        // Too large for a tap, too small and slow for a swipe.
        self.debug(format_args!(
            "no gesture: displacement {:.1} px over {:?}",
            displacement.length(),
            duration
        ));
    }

    /// A tap within the pairing window of the previous tap becomes a double tap. A double
    /// tap consumes the pairing reference, so a third rapid tap starts a fresh pair.
    fn disambiguate_tap(&mut self, now: Instant) -> GestureKind {
        let paired = self
            .last_tap
            .is_some_and(|last| now.saturating_duration_since(last) < self.config.tap_duration);

        if paired {
            self.last_tap = None;
            GestureKind::DoubleTap
        } else {
            self.last_tap = Some(now);
            GestureKind::Tap
        }
    }

    fn fire_due_long_press(&mut self, now: Instant, raw: Option<&RawEvent>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(deadline) = session.long_press_deadline() else {
            return;
        };
        if now < deadline {
            return;
        }

        session.fire_long_press();
        let gesture = GestureEvent {
            kind: GestureKind::LongPress,
            displacement: session.displacement(),
            velocity: session.velocity(),
            duration: deadline - session.started(),
            contacts: session.contact_points(),
            raw: raw.cloned(),
        };
        self.pulse(Pulse::Heavy);
        self.callbacks.long_press(&gesture);
    }

    /// An event snapshot of the running session, used for start and move callbacks. Carries
    /// the dominant direction of the displacement so far.
    fn session_event(session: &GestureSession, raw: &RawEvent) -> GestureEvent {
        let displacement = session.displacement();
        GestureEvent {
            kind: GestureKind::Swipe(SwipeDirection::of(displacement)),
            displacement,
            velocity: session.velocity(),
            duration: session.duration(raw.time),
            contacts: session.contact_points(),
            raw: Some(raw.clone()),
        }
    }

    fn cancel_session(&mut self) {
        if self.session.take().is_some() {
            self.debug(format_args!("session discarded without classification"));
        }
    }

    fn scroll_response(&self, update: &ContactUpdate) -> EventResponse {
        if self.config.prevent_scroll && update.modality == Modality::Touch {
            EventResponse::Consumed
        } else {
            EventResponse::Ignored
        }
    }

    fn pulse(&mut self, pulse: Pulse) {
        if !self.config.haptics {
            return;
        }
        if let Some(haptics) = self.haptics.as_mut() {
            haptics.pulse(pulse)
        }
    }

    fn debug(&self, args: fmt::Arguments) {
        if self.config.debug {
            debug!("{args}");
        }
    }
}

impl fmt::Debug for GestureRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .field("attached", &self.attached)
            .field("enabled", &self.enabled)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
