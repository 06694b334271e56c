//! Selection, per-card edits and card set changes for CarouselEngine.

use super::CarouselEngine;
use crate::card::{CardEntity, CardId};
use crate::catalog::CardSpec;
use crate::interaction::{GestureId, SelectionChange};
use crate::scene::NodeHandle;

impl CarouselEngine {
    /// Select a card. Returns `true` if the selection changed.
    ///
    /// Unknown ids are ignored with a warning. Selecting the already
    /// selected card is a no-op.
    pub fn select(&mut self, id: CardId) -> bool {
        self.select_with(id, None)
    }

    /// Clear the selection. Returns `true` if anything was selected.
    pub fn deselect(&mut self) -> bool {
        self.deselect_with(None)
    }

    pub(super) fn select_with(
        &mut self,
        id: CardId,
        gesture: Option<GestureId>,
    ) -> bool {
        let Some(rank) = self.cards.rank(id) else {
            log::warn!("select: unknown card {id}");
            return false;
        };
        if !self.selection.apply(SelectionChange::Select(id), gesture) {
            return false;
        }
        log::debug!(
            "selected {id} (generation {})",
            self.selection.generation()
        );
        self.camera.exit_intro();
        self.scroll.focus_rank(rank);
        true
    }

    pub(super) fn deselect_with(&mut self, gesture: Option<GestureId>) -> bool {
        if !self.selection.apply(SelectionChange::Clear, gesture) {
            return false;
        }
        log::debug!(
            "selection cleared (generation {})",
            self.selection.generation()
        );
        self.scroll.release_focus();
        true
    }

    /// Select the card nearest the scroll target (keyboard confirm).
    /// Does nothing while a card is already selected.
    pub fn confirm_focused(&mut self, gesture: Option<GestureId>) -> bool {
        if self.selected().is_some() {
            return false;
        }
        let rank = self
            .layout()
            .nearest_rank(self.scroll.target(), self.cards.len());
        let Some(id) = rank
            .and_then(|r| self.cards.at_rank(r))
            .map(CardEntity::id)
        else {
            return false;
        };
        self.select_with(id, gesture)
    }

    /// Choose a card's variant. Out-of-range indices fall back to 0.
    /// Returns `true` if the chosen variant changed.
    pub fn set_variant(&mut self, id: CardId, index: usize) -> bool {
        match self.cards.get_mut(id) {
            Some(card) => card.set_variant(index),
            None => {
                log::warn!("set_variant: unknown card {id}");
                false
            }
        }
    }

    /// Advance the selected card to its next variant.
    pub fn cycle_selected_variant(&mut self) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };
        self.cards.get_mut(id).is_some_and(CardEntity::cycle_variant)
    }

    /// Show the back (`true`) or the front of a card. Only the selected
    /// card can be flipped; the flip persists after it is deselected.
    /// Returns `true` if the card changed sides, so repeating a request is
    /// a no-op.
    pub fn set_flipped(&mut self, id: CardId, flipped: bool) -> bool {
        if self.selected() != Some(id) {
            log::debug!("set_flipped: {id} is not selected");
            return false;
        }
        let Some(card) = self.cards.get_mut(id) else {
            return false;
        };
        if !card.set_flipped(flipped) {
            return false;
        }
        log::debug!("{id} flipped: {flipped}");
        true
    }

    /// Turn the selected card over to its other side.
    pub fn toggle_flip(&mut self, id: CardId) -> bool {
        let Some(flipped) = self.cards.get(id).map(CardEntity::is_flipped)
        else {
            return false;
        };
        self.set_flipped(id, !flipped)
    }

    /// Add a card to the running carousel. It appears on its idle slot;
    /// neighbours slide to make room. Returns `false` for duplicate ids.
    pub fn add_card(&mut self, spec: CardSpec) -> bool {
        let id = spec.id;
        if !self.cards.insert(CardEntity::from_spec(spec)) {
            log::warn!("add_card: duplicate card id {id}");
            return false;
        }
        let _ = self.bindings.bind(id, NodeHandle(id.0));
        self.sync_card_count();
        self.place_card(id);
        true
    }

    /// Remove a card. A selection on it is cleared. Returns `false` for
    /// unknown ids.
    pub fn remove_card(&mut self, id: CardId) -> bool {
        if self.cards.remove(id).is_none() {
            log::warn!("remove_card: unknown card {id}");
            return false;
        }
        let _ = self.bindings.unbind(id);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.selection.forget(id) {
            self.scroll.release_focus();
        }
        self.sync_card_count();
        true
    }

    /// Push the card count to the scroll controller and keep a selection
    /// centered on its (possibly shifted) rank.
    fn sync_card_count(&mut self) {
        self.scroll.set_card_count(self.cards.len());
        if let Some(rank) = self.selected().and_then(|id| self.cards.rank(id)) {
            self.scroll.focus_rank(rank);
        }
    }
}
