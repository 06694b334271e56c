//! Browser glue: logging setup and DOM event conversion.
//!
//! The host owns the canvas and its listeners; these helpers only turn DOM
//! events into [`InputEvent`]s and key code strings. DOM coordinates are
//! CSS pixels, so every pointer conversion takes the device pixel ratio
//! used for the viewport passed to
//! [`CarouselEngine::resize`](crate::engine::CarouselEngine::resize).

use web_sys::{KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use crate::input::{InputEvent, MouseButton, WheelDeltaMode};

/// Route `log` output to the browser console and panics to
/// `console.error`. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Touch lifecycle stage, named after the DOM event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// `touchstart`
    Start,
    /// `touchmove`
    Move,
    /// `touchend`
    End,
    /// `touchcancel`
    Cancel,
}

/// `mousemove` → [`InputEvent::PointerMoved`].
#[must_use]
pub fn pointer_moved(event: &MouseEvent, pixel_ratio: f32) -> InputEvent {
    InputEvent::PointerMoved {
        x: event.offset_x() as f32 * pixel_ratio,
        y: event.offset_y() as f32 * pixel_ratio,
    }
}

/// `mousedown` / `mouseup` → [`InputEvent::PointerButton`]. Back/forward
/// buttons are dropped.
#[must_use]
pub fn pointer_button(event: &MouseEvent, pressed: bool) -> Option<InputEvent> {
    let button = match event.button() {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => return None,
    };
    Some(InputEvent::PointerButton { button, pressed })
}

/// `wheel` → [`InputEvent::Wheel`], keeping the DOM delta mode.
#[must_use]
pub fn wheel(event: &WheelEvent) -> InputEvent {
    InputEvent::Wheel {
        delta_x: event.delta_x() as f32,
        delta_y: event.delta_y() as f32,
        mode: WheelDeltaMode::from_dom(event.delta_mode()),
    }
}

/// Touch event → touch [`InputEvent`], tracking the first changed touch.
///
/// `origin` is the canvas' client-space top left corner in CSS pixels.
/// Returns `None` when the event carries no touch.
#[must_use]
pub fn touch(
    event: &TouchEvent,
    phase: TouchPhase,
    origin: (f32, f32),
    pixel_ratio: f32,
) -> Option<InputEvent> {
    if phase == TouchPhase::Cancel {
        return Some(InputEvent::TouchCancel);
    }
    let t = event.changed_touches().get(0)?;
    let x = (t.client_x() as f32 - origin.0) * pixel_ratio;
    let y = (t.client_y() as f32 - origin.1) * pixel_ratio;
    Some(match phase {
        TouchPhase::Start => InputEvent::TouchStart { x, y },
        TouchPhase::Move => InputEvent::TouchMove { x, y },
        TouchPhase::End | TouchPhase::Cancel => InputEvent::TouchEnd { x, y },
    })
}

/// Layout-independent key code for
/// [`CarouselEngine::handle_key_press`](crate::engine::CarouselEngine::handle_key_press).
/// Auto-repeat presses are dropped.
#[must_use]
pub fn key_code(event: &KeyboardEvent) -> Option<String> {
    (!event.repeat()).then(|| event.code())
}
