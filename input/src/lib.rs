//! Pointer gesture recognition: heterogeneous touch / mouse / pointer input is normalized
//! into per-contact updates, tracked in a gesture session, and classified into swipes,
//! taps, double taps, and long presses at release time.
mod callbacks;
pub mod classify;
mod config;
mod contact;
mod gesture;
mod haptics;
mod raw;
mod recognizer;
mod session;
mod winit_input;

pub use callbacks::*;
pub use config::*;
pub use contact::*;
pub use gesture::*;
pub use haptics::*;
pub use raw::*;
pub use recognizer::*;
pub use winit_input::*;
