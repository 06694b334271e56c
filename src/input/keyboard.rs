//! Bindable key actions.

use serde::{Deserialize, Serialize};

/// Carousel actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// step_left = ["ArrowLeft"]
/// close = ["Escape"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Scroll one slot to the left.
    StepLeft,
    /// Scroll one slot to the right.
    StepRight,
    /// Select the card nearest the scroll focus.
    Confirm,
    /// Close the current selection.
    Close,
    /// Flip the selected card.
    Flip,
    /// Advance the selected card to its next appearance variant.
    CycleVariant,
}
