//! Input handling: event types, gesture tracking, and the input processor
//! that converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Pointer normalization, edge zones and wheel impulses.
pub mod mapper;
/// Click pairing and touch tap/drag tracking.
pub mod mouse;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton, WheelDeltaMode};
pub use keyboard::KeyAction;
pub use mapper::{InputMapper, PointerZone};
pub use processor::InputProcessor;
