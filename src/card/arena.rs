//! The live card set, kept in display order.

use rustc_hash::FxHashMap;

use super::entity::{CardEntity, CardId};
use crate::catalog::Catalog;

/// Cards sorted by `(slot_index, id)` with an id → rank index.
///
/// A card's position in the sorted list is its display rank; layout works
/// on ranks, so gaps in catalog slot indices never leave empty slots.
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    cards: Vec<CardEntity>,
    index: FxHashMap<CardId, usize>,
}

impl CardSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from a catalog. Duplicate ids after the first are
    /// skipped with a warning.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut set = Self::new();
        for spec in &catalog.cards {
            if set.index.contains_key(&spec.id) {
                log::warn!("duplicate card id {} skipped", spec.id);
                continue;
            }
            let _ = set.index.insert(spec.id, set.cards.len());
            set.cards.push(CardEntity::from_spec(spec.clone()));
        }
        set.reindex();
        set
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a card with this id exists.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardEntity> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Look up a card mutably.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut CardEntity> {
        self.index.get(&id).map(|&i| &mut self.cards[i])
    }

    /// Display rank of a card.
    #[must_use]
    pub fn rank(&self, id: CardId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Card at a display rank.
    #[must_use]
    pub fn at_rank(&self, rank: usize) -> Option<&CardEntity> {
        self.cards.get(rank)
    }

    /// Cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CardEntity> {
        self.cards.iter()
    }

    /// Cards in display order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardEntity> {
        self.cards.iter_mut()
    }

    /// Card ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(CardEntity::id).collect()
    }

    /// Add a card. Returns `false` (and leaves the set untouched) if the
    /// id is already present.
    pub fn insert(&mut self, card: CardEntity) -> bool {
        if self.contains(card.id()) {
            return false;
        }
        self.cards.push(card);
        self.reindex();
        true
    }

    /// Remove a card, returning it.
    pub fn remove(&mut self, id: CardId) -> Option<CardEntity> {
        let i = self.index.get(&id).copied()?;
        let card = self.cards.remove(i);
        self.reindex();
        Some(card)
    }

    fn reindex(&mut self) {
        self.cards
            .sort_by_key(|card| (card.slot_index(), card.id()));
        self.index.clear();
        for (rank, card) in self.cards.iter().enumerate() {
            let _ = self.index.insert(card.id(), rank);
        }
    }
}
