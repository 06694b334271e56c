//! The single active selection and its change rules.

use crate::card::CardId;

/// Identifies one user gesture (a press/release pair, a tap, a key press).
///
/// At most one selection change is accepted per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GestureId(pub u64);

/// A requested change to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Make this card the active selection.
    Select(CardId),
    /// Clear the active selection.
    Clear,
}

/// Holder of the process-wide "active selection id".
///
/// Only one card can ever be active. Requests resolve last-event-wins:
/// selecting B while A is active leaves exactly B active.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: Option<CardId>,
    last_gesture: Option<GestureId>,
    generation: u64,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active card, if any. May refer to a card that has since been
    /// removed; callers validate against the card set.
    #[must_use]
    pub fn active(&self) -> Option<CardId> {
        self.active
    }

    /// Bumped on every change that actually altered the active card.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply a change. Returns `true` if the active card changed.
    ///
    /// A request carrying a gesture that already produced a selection
    /// request is rejected. Requests without a gesture (programmatic
    /// calls) are always considered. Re-applying the current value is a
    /// no-op.
    pub fn apply(
        &mut self,
        change: SelectionChange,
        gesture: Option<GestureId>,
    ) -> bool {
        if let Some(g) = gesture {
            if self.last_gesture == Some(g) {
                log::debug!("selection request ignored: gesture {g:?} spent");
                return false;
            }
            self.last_gesture = Some(g);
        }

        let next = match change {
            SelectionChange::Select(id) => Some(id),
            SelectionChange::Clear => None,
        };
        if next == self.active {
            return false;
        }

        log::debug!("selection {:?} -> {next:?}", self.active);
        self.active = next;
        self.generation += 1;
        true
    }

    /// Clear the selection if it refers to `id` (e.g. the card was
    /// removed). Returns `true` if it did.
    pub fn forget(&mut self, id: CardId) -> bool {
        if self.active == Some(id) {
            self.active = None;
            self.generation += 1;
            true
        } else {
            false
        }
    }
}
