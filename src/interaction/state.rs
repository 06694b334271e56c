//! Per-frame discrete interaction state of a card.

use crate::card::CardId;
use crate::input::PointerZone;

/// The one state a card is in for a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// Nothing selected, not hovered.
    #[default]
    Idle,
    /// Nothing selected, pointer over this card.
    Hovered,
    /// This card is the active selection.
    Selected,
    /// Another card is selected.
    Dimmed,
}

impl InteractionState {
    /// Whether this state only exists because of a selection.
    #[must_use]
    pub fn is_selection_bound(self) -> bool {
        matches!(self, Self::Selected | Self::Dimmed)
    }
}

/// Pointer facts the resolver needs, captured once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerContext {
    /// Card under the pointer, as reported by the host's picking.
    pub hovered: Option<CardId>,
    /// Horizontal zone the pointer occupies.
    pub zone: PointerZone,
    /// Whether a touch drag is in progress.
    pub dragging: bool,
}

impl PointerContext {
    /// The card that may show hover, if any.
    ///
    /// Edge zones belong to the scroll affordances and drags belong to the
    /// carousel, so neither hovers a card.
    #[must_use]
    pub fn hover_candidate(&self) -> Option<CardId> {
        if self.dragging || self.zone != PointerZone::Center {
            return None;
        }
        self.hovered
    }
}

/// Resolve the state of `card`.
///
/// `active` must already be validated against the card set (see
/// [`effective_selection`]); hover is ignored entirely while anything is
/// selected.
#[must_use]
pub fn resolve(
    card: CardId,
    active: Option<CardId>,
    pointer: &PointerContext,
) -> InteractionState {
    match active {
        Some(selected) if selected == card => InteractionState::Selected,
        Some(_) => InteractionState::Dimmed,
        None if pointer.hover_candidate() == Some(card) => {
            InteractionState::Hovered
        }
        None => InteractionState::Idle,
    }
}

/// Drop a selection that refers to a card no longer in the set.
#[must_use]
pub fn effective_selection(
    active: Option<CardId>,
    contains: impl Fn(CardId) -> bool,
) -> Option<CardId> {
    active.filter(|&id| contains(id))
}
