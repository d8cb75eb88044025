//! The 2D primitives the gesture recognizer computes with.
mod point;

pub use point::*;
