//! Platform-agnostic input events fed to the engine.

use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CarouselCommand`](crate::engine::CarouselCommand)
/// values. Coordinates are physical pixels relative to the viewport's top
/// left corner.
///
/// Events serialize with a `type` tag so replay scripts stay readable:
///
/// ```json
/// { "type": "wheel", "delta_x": 0.0, "delta_y": 240.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer moved to absolute viewport position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Pointer left the viewport.
    PointerLeft,
    /// Wheel or trackpad scroll.
    Wheel {
        /// Horizontal delta (positive = right).
        delta_x: f32,
        /// Vertical delta (positive = down).
        delta_y: f32,
        /// Units of the deltas.
        #[serde(default)]
        mode: WheelDeltaMode,
    },
    /// A finger touched down.
    TouchStart {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The touching finger moved.
    TouchMove {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The finger lifted.
    TouchEnd {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The platform cancelled the touch.
    TouchCancel,
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Unit of a wheel delta, as in the DOM `WheelEvent.deltaMode`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WheelDeltaMode {
    /// Deltas are pixels.
    #[default]
    Pixel,
    /// Deltas are lines of text.
    Line,
    /// Deltas are whole pages.
    Page,
}

impl WheelDeltaMode {
    /// Map a DOM `deltaMode` value (0, 1, 2). Unknown values are pixels.
    #[must_use]
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit wheel delta. Line deltas use winit's sign
    /// convention (positive = up/left), so they are negated.
    #[must_use]
    pub fn from_winit_wheel(delta: winit::event::MouseScrollDelta) -> Self {
        match delta {
            winit::event::MouseScrollDelta::LineDelta(x, y) => Self::Wheel {
                delta_x: -x,
                delta_y: -y,
                mode: WheelDeltaMode::Line,
            },
            winit::event::MouseScrollDelta::PixelDelta(pos) => Self::Wheel {
                delta_x: -(pos.x as f32),
                delta_y: -(pos.y as f32),
                mode: WheelDeltaMode::Pixel,
            },
        }
    }
}
