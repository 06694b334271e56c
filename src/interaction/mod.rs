//! Interaction state resolution: which of idle / hovered / selected /
//! dimmed each card is in, and the single-selection rules behind it.

pub mod selection;
pub mod state;

pub use selection::{GestureId, Selection, SelectionChange};
pub use state::{
    effective_selection, resolve, InteractionState, PointerContext,
};
