//! Shared utilities for hosts driving the engine.

pub mod frame_timing;

pub use frame_timing::FrameClock;
