//! Damped interpolation primitives shared by cards, scroll and camera.

pub mod damping;
pub mod smoothed;

pub use damping::{damp, retention, Damp};
pub use smoothed::Smoothed;
