//! The immutable card catalog supplied by the host at startup.
//!
//! ```json
//! { "cards": [
//!   { "id": 10, "slot_index": 0,
//!     "variants": [ { "name": "ivory", "base_color": [0.95, 0.93, 0.88] } ],
//!     "flip_assets": { "front": "cards/10-front.ktx2", "back": "cards/10-back.ktx2" } }
//! ] }
//! ```
//!
//! Asset paths are opaque to the engine; they are handed back to the host's
//! loaders untouched.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::error::VitrineError;

/// One appearance variant of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Display name.
    pub name: String,
    /// Linear RGB base color.
    pub base_color: [f32; 3],
    /// Texture asset key, if the variant has one.
    #[serde(default)]
    pub texture: Option<String>,
}

impl Default for Variant {
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            base_color: [1.0, 1.0, 1.0],
            texture: None,
        }
    }
}

/// Front/back asset keys for a flippable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipAssets {
    /// Asset shown face-up.
    pub front: String,
    /// Asset shown after a flip.
    pub back: String,
}

/// Catalog entry for one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Stable identity, unique within the catalog.
    pub id: CardId,
    /// Position in display order.
    pub slot_index: u32,
    /// Appearance variants; an empty list gets one default variant.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Flip assets, if the card has a back face.
    #[serde(default)]
    pub flip_assets: Option<FlipAssets>,
}

impl CardSpec {
    /// A card with a single default variant.
    #[must_use]
    pub fn new(id: u32, slot_index: u32) -> Self {
        Self {
            id: CardId(id),
            slot_index,
            variants: Vec::new(),
            flip_assets: None,
        }
    }

    /// Builder: append a variant.
    #[must_use]
    pub fn with_variant(mut self, name: &str, base_color: [f32; 3]) -> Self {
        self.variants.push(Variant {
            name: name.to_owned(),
            base_color,
            texture: None,
        });
        self
    }
}

/// The full catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Cards in any order; display order comes from `slot_index`.
    pub cards: Vec<CardSpec>,
}

impl Catalog {
    /// Catalog of `count` plain cards with ids and slots `0..count`.
    #[must_use]
    pub fn sequential(count: u32) -> Self {
        Self {
            cards: (0..count).map(|i| CardSpec::new(i, i)).collect(),
        }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(content: &str) -> Result<Self, VitrineError> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog JSON file.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        log::info!(
            "catalog loaded from {}: {} cards",
            path.display(),
            catalog.cards.len()
        );
        Ok(catalog)
    }

    /// Reject catalogs with duplicate card ids.
    pub fn validate(&self) -> Result<(), VitrineError> {
        let mut seen = FxHashSet::default();
        for card in &self.cards {
            if !seen.insert(card.id) {
                return Err(VitrineError::InvalidCatalog(format!(
                    "duplicate card id {}",
                    card.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_entries() {
        let json = r#"{ "cards": [
            { "id": 3, "slot_index": 1 },
            { "id": 8, "slot_index": 0,
              "variants": [ { "name": "red", "base_color": [1.0, 0.0, 0.0] } ],
              "flip_assets": { "front": "a.png", "back": "b.png" } }
        ] }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.cards.len(), 2);
        assert!(catalog.cards[0].variants.is_empty());
        assert_eq!(catalog.cards[1].variants[0].name, "red");
        assert_eq!(
            catalog.cards[1].flip_assets.as_ref().map(|f| f.back.as_str()),
            Some("b.png")
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{ "cards": [
            { "id": 1, "slot_index": 0 },
            { "id": 1, "slot_index": 1 }
        ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, VitrineError::InvalidCatalog(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{ cards: ").unwrap_err();
        assert!(matches!(err, VitrineError::CatalogParse(_)));
    }

    #[test]
    fn sequential_catalog_is_valid() {
        let catalog = Catalog::sequential(6);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.cards[5].slot_index, 5);
    }
}
