//! Cards: identity, animated transform/material state, the display-ordered
//! card set, and the per-state target looks they animate toward.

pub mod animator;
pub mod arena;
pub mod entity;
pub mod looks;

pub use arena::CardSet;
pub use entity::{base_yaw, CardEntity, CardId, Material, Transform};
pub use looks::{resolve_targets, selected_rotation, LookContext};
