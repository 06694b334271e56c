//! Advances a card's transform and material toward their targets.

use super::entity::{CardEntity, Material, Transform};
use crate::interaction::InteractionState;
use crate::options::SmoothingOptions;

/// Half-life for a card's current motion.
///
/// Motion into or out of a selection uses the heavier `selection`
/// half-life until the card settles; everything else uses `hover`.
#[must_use]
pub fn half_life(heavy_motion: bool, smoothing: &SmoothingOptions) -> f32 {
    if heavy_motion {
        smoothing.selection
    } else {
        smoothing.hover
    }
}

/// Whether a state change starts selection-weight motion.
#[must_use]
pub fn is_heavy_transition(
    previous: InteractionState,
    next: InteractionState,
) -> bool {
    previous != next
        && (previous.is_selection_bound() || next.is_selection_bound())
}

/// Record the card's state for this frame, retarget it and step one frame.
///
/// Returns `true` while the card is still moving.
pub fn animate(
    card: &mut CardEntity,
    state: InteractionState,
    targets: (Transform, Material),
    smoothing: &SmoothingOptions,
    dt: f32,
) -> bool {
    if is_heavy_transition(card.state, state) {
        card.heavy_motion = true;
    }
    card.state = state;

    let (transform, material) = targets;
    card.transform.set_target(transform);
    card.material.set_target(material);

    let hl = half_life(card.heavy_motion, smoothing);
    let eps = smoothing.settle_epsilon;
    let moving_transform = card.transform.tick(hl, dt, eps);
    let moving_material = card.material.tick(hl, dt, eps);
    let moving = moving_transform || moving_material;
    if !moving {
        card.heavy_motion = false;
    }
    moving
}

/// Place a card on its targets immediately (new cards, first frame).
pub fn place(
    card: &mut CardEntity,
    state: InteractionState,
    targets: (Transform, Material),
) {
    card.state = state;
    card.heavy_motion = false;
    card.transform.set_target(targets.0);
    card.material.set_target(targets.1);
    card.transform.snap();
    card.material.snap();
}
