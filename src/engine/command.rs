//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! gesture, touch, GUI button, or programmatic call, is represented as a
//! `CarouselCommand`. Consumers construct commands and pass them to
//! [`CarouselEngine::execute`](super::CarouselEngine::execute).

use glam::Vec2;

use crate::card::CardId;
use crate::carousel::{ScrollDirection, ScrollImpulse};
use crate::input::PointerZone;
use crate::interaction::GestureId;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(CarouselCommand::Step { direction: ScrollDirection::Right });
/// engine.execute(CarouselCommand::Select { id: CardId(3), gesture: None });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    // ── Pointer ─────────────────────────────────────────────────────
    /// The pointer moved.
    PointerMoved {
        /// Position in normalized device coordinates (y up).
        position: Vec2,
        /// Horizontal zone the pointer is in.
        zone: PointerZone,
    },

    /// The pointer left the viewport.
    PointerLeft,

    // ── Scrolling ───────────────────────────────────────────────────
    /// Scroll by a wheel impulse.
    Scroll {
        /// Direction and pixel magnitude.
        impulse: ScrollImpulse,
    },

    /// Scroll one slot.
    Step {
        /// Which way.
        direction: ScrollDirection,
    },

    /// Follow a touch drag.
    Drag {
        /// Horizontal finger movement in pixels since the last report.
        delta_px: f32,
    },

    /// The touch drag ended.
    EndDrag,

    // ── Selection ───────────────────────────────────────────────────
    /// Select a card.
    Select {
        /// The card to select.
        id: CardId,
        /// Gesture that produced the request; `None` for API calls.
        gesture: Option<GestureId>,
    },

    /// Clear the selection.
    Deselect {
        /// Gesture that produced the request; `None` for API calls.
        gesture: Option<GestureId>,
    },

    /// Select the card nearest the scroll focus.
    ConfirmFocused {
        /// Gesture that produced the request; `None` for API calls.
        gesture: Option<GestureId>,
    },

    // ── Selected card ───────────────────────────────────────────────
    /// Flip the selected card over.
    ToggleFlip,

    /// Advance the selected card to its next variant.
    CycleVariant,

    /// Choose a variant for any card.
    SetVariant {
        /// The card.
        id: CardId,
        /// Variant index; out-of-range values fall back to 0.
        index: usize,
    },
}

impl CarouselCommand {
    /// Whether the command comes from direct user input (and so ends the
    /// intro shot).
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        match self {
            Self::Select { gesture, .. }
            | Self::Deselect { gesture }
            | Self::ConfirmFocused { gesture } => gesture.is_some(),
            Self::PointerLeft | Self::SetVariant { .. } => false,
            Self::PointerMoved { .. }
            | Self::Scroll { .. }
            | Self::Step { .. }
            | Self::Drag { .. }
            | Self::EndDrag
            | Self::ToggleFlip
            | Self::CycleVariant => true,
        }
    }
}
