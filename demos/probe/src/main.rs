//! A window that logs every gesture the recognizer classifies. Run with
//! `RUST_LOG=info cargo run -p probe` and swipe, tap, or hold.

use std::time::Instant;

use anyhow::Result;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use tactile_input::{GestureCallbacks, GestureConfig, GestureRecognizer, WinitPointerAdapter};

fn main() -> Result<()> {
    env_logger::init();

    let callbacks = GestureCallbacks {
        on_gesture_end: Some(Box::new(|e| {
            info!(
                "{:?}, {:.0} px in {:?} at {:.2} px/ms",
                e.kind,
                e.displacement.length(),
                e.duration,
                e.velocity.length()
            )
        })),
        on_tap: Some(Box::new(|e| info!("tap after {:?}", e.duration))),
        on_double_tap: Some(Box::new(|_| info!("double tap"))),
        on_long_press: Some(Box::new(|e| {
            info!("long press at {:?}", e.contacts.first().map(|c| c.pos))
        })),
        ..Default::default()
    };

    let mut probe = Probe {
        window: None,
        adapter: WinitPointerAdapter::new(),
        recognizer: GestureRecognizer::new(GestureConfig::default(), callbacks),
    };

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut probe)?;
    Ok(())
}

struct Probe {
    window: Option<Window>,
    adapter: WinitPointerAdapter,
    recognizer: GestureRecognizer,
}

impl ApplicationHandler for Probe {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes().with_title("tactile probe");
        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.recognizer.attach(window.id());
                self.window = Some(window);
            }
            Err(e) => {
                error!("window creation failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(raw) = self.adapter.raw_event(window_id, &event, Instant::now()) {
            self.recognizer.process(&raw);
        }
        self.schedule_long_press(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.recognizer.tick(Instant::now());
        self.schedule_long_press(event_loop);
    }
}

impl Probe {
    /// Wakes the event loop at the armed long press deadline so a stationary hold fires
    /// without further input.
    fn schedule_long_press(&self, event_loop: &ActiveEventLoop) {
        match self.recognizer.long_press_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
