//! Camera system for viewing the carousel.
//!
//! Provides the perspective camera handed to the renderer and the rig that
//! keeps it in sync with the carousel's view mode, selection and scroll.

/// Core perspective camera.
pub mod core;
/// State-driven camera rig.
pub mod rig;

pub use self::core::Camera;
pub use self::rig::{camera_target, CameraRig, CameraTarget, ViewMode};
