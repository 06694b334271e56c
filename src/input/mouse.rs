//! Click and touch tracking for pointer gestures.

use glam::Vec2;

use crate::card::CardId;

/// Result of processing a pointer release through the click tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// No selection action (drag, mismatched press/release, etc.)
    NoAction,
    /// Pressed and released on the same card.
    Card(CardId),
    /// Pressed and released on the background.
    Background,
}

/// Tracks pointer position, drag state, and press/release pairing.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    /// Last pointer position in physical pixels.
    pub pointer_pos: Vec2,
    /// Card under the pointer at press time.
    pub press_target: Option<CardId>,
    /// Whether the button is currently held.
    pub pressed: bool,
    /// Whether the held pointer travelled far enough to count as a drag.
    pub is_dragging: bool,
    press_pos: Vec2,
}

impl ClickTracker {
    /// Create a tracker with no active press.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what card (if any) is under the pointer at press time.
    pub fn handle_press(&mut self, hovered: Option<CardId>) {
        self.press_target = hovered;
        self.press_pos = self.pointer_pos;
        self.pressed = true;
        self.is_dragging = false;
    }

    /// Update the pointer position; a held pointer that moves more than
    /// `drag_threshold` pixels from the press point becomes a drag.
    pub fn handle_pointer_position(&mut self, pos: Vec2, drag_threshold: f32) {
        self.pointer_pos = pos;
        if self.pressed && pos.distance(self.press_pos) > drag_threshold {
            self.is_dragging = true;
        }
    }

    /// Forget the current press without producing a click.
    pub fn cancel(&mut self) {
        self.pressed = false;
        self.press_target = None;
        self.is_dragging = false;
    }

    /// Process a release and return what kind of click happened.
    ///
    /// `hovered` is the card under the pointer at release time.
    pub fn handle_release(&mut self, hovered: Option<CardId>) -> ClickResult {
        if !self.pressed {
            return ClickResult::NoAction;
        }
        let press_target = self.press_target.take();
        let was_dragging = self.is_dragging;
        self.pressed = false;
        self.is_dragging = false;

        if was_dragging {
            return ClickResult::NoAction;
        }
        match (press_target, hovered) {
            (Some(down), Some(up)) if down == up => ClickResult::Card(up),
            (None, None) => ClickResult::Background,
            _ => ClickResult::NoAction,
        }
    }
}

/// What a touch movement amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchMotion {
    /// Still within the tap threshold.
    Pending,
    /// The finger is dragging; carries the horizontal pixel delta since the
    /// previous report (the full travel on the first one).
    Drag(f32),
}

/// How a touch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchRelease {
    /// No touch was active.
    None,
    /// The touch never became a drag.
    Tap,
    /// The touch was dragging.
    DragEnded,
}

/// Single-finger touch tracking: tap vs. horizontal drag.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    start: Option<Vec2>,
    last: Vec2,
    dragging: bool,
}

impl TouchTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a touch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the active touch is dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A finger touched down.
    pub fn start(&mut self, pos: Vec2) {
        self.start = Some(pos);
        self.last = pos;
        self.dragging = false;
    }

    /// The finger moved to `pos`.
    pub fn move_to(&mut self, pos: Vec2, drag_threshold: f32) -> TouchMotion {
        let Some(start) = self.start else {
            return TouchMotion::Pending;
        };
        if !self.dragging {
            if pos.distance(start) <= drag_threshold {
                return TouchMotion::Pending;
            }
            self.dragging = true;
            self.last = start;
        }
        let dx = pos.x - self.last.x;
        self.last = pos;
        TouchMotion::Drag(dx)
    }

    /// The finger lifted (or the touch was cancelled).
    pub fn end(&mut self) -> TouchRelease {
        let was_dragging = self.dragging;
        self.dragging = false;
        if self.start.take().is_none() {
            return TouchRelease::None;
        }
        if was_dragging {
            TouchRelease::DragEnded
        } else {
            TouchRelease::Tap
        }
    }
}
