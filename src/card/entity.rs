//! A card in the carousel and its damped pose and material.

use std::f32::consts::PI;
use std::fmt;

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::{Damp, Smoothed};
use crate::catalog::{CardSpec, FlipAssets, Variant};
use crate::interaction::InteractionState;

/// Stable card identity, unique within a carousel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, Euler rotation and scale of a card.
///
/// `rotation` holds (pitch, yaw, roll) in radians, applied in YXZ order
/// (yaw first). Euler angles damp componentwise, which keeps a 0 → π flip
/// a single smooth half turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// (pitch, yaw, roll) in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Origin, facing forward, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Identity transform moved to `position`.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Rotation as a quaternion (YXZ order).
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// Model matrix for the renderer.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation_quat(),
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Damp for Transform {
    fn damp(self, target: Self, half_life: f32, dt: f32) -> Self {
        Self {
            position: self.position.damp(target.position, half_life, dt),
            rotation: self.rotation.damp(target.rotation, half_life, dt),
            scale: self.scale.damp(target.scale, half_life, dt),
        }
    }

    fn max_delta(&self, other: &Self) -> f32 {
        self.position
            .max_delta(&other.position)
            .max(self.rotation.max_delta(&other.rotation))
            .max(self.scale.max_delta(&other.scale))
    }
}

/// Surface appearance parameters of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// 0 = invisible, 1 = opaque.
    pub opacity: f32,
    /// PBR roughness.
    pub roughness: f32,
    /// PBR metalness.
    pub metalness: f32,
    /// Linear RGB emissive color.
    pub emissive: Vec3,
    /// Linear RGB base color.
    pub base_color: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            roughness: 0.5,
            metalness: 0.2,
            emissive: Vec3::ZERO,
            base_color: Vec3::ONE,
        }
    }
}

impl Damp for Material {
    fn damp(self, target: Self, half_life: f32, dt: f32) -> Self {
        Self {
            opacity: self.opacity.damp(target.opacity, half_life, dt),
            roughness: self.roughness.damp(target.roughness, half_life, dt),
            metalness: self.metalness.damp(target.metalness, half_life, dt),
            emissive: self.emissive.damp(target.emissive, half_life, dt),
            base_color: self.base_color.damp(target.base_color, half_life, dt),
        }
    }

    fn max_delta(&self, other: &Self) -> f32 {
        (self.opacity - other.opacity)
            .abs()
            .max((self.roughness - other.roughness).abs())
            .max((self.metalness - other.metalness).abs())
            .max(self.emissive.max_delta(&other.emissive))
            .max(self.base_color.max_delta(&other.base_color))
    }
}

/// Facing yaw of a card at rest: 0, or a half turn when flipped.
#[must_use]
pub fn base_yaw(flipped: bool) -> f32 {
    if flipped {
        PI
    } else {
        0.0
    }
}

/// One card in the carousel: catalog data plus animated state.
#[derive(Debug, Clone)]
pub struct CardEntity {
    id: CardId,
    slot_index: u32,
    variants: Vec<Variant>,
    flip_assets: Option<FlipAssets>,
    variant_index: usize,
    flipped: bool,
    /// Current/target transform.
    pub transform: Smoothed<Transform>,
    /// Current/target material.
    pub material: Smoothed<Material>,
    /// State resolved on the most recent frame.
    pub(crate) state: InteractionState,
    /// Set while motion into or out of a selection is still settling.
    pub(crate) heavy_motion: bool,
}

impl CardEntity {
    /// Build a card from its catalog entry, resting at the origin.
    #[must_use]
    pub fn from_spec(spec: CardSpec) -> Self {
        let mut variants = spec.variants;
        if variants.is_empty() {
            variants.push(Variant::default());
        }
        let material = Material {
            base_color: Vec3::from_array(variants[0].base_color),
            ..Material::default()
        };
        Self {
            id: spec.id,
            slot_index: spec.slot_index,
            variants,
            flip_assets: spec.flip_assets,
            variant_index: 0,
            flipped: false,
            transform: Smoothed::new(Transform::IDENTITY),
            material: Smoothed::new(material),
            state: InteractionState::Idle,
            heavy_motion: false,
        }
    }

    /// Card identity.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Catalog display order.
    #[must_use]
    pub fn slot_index(&self) -> u32 {
        self.slot_index
    }

    /// State resolved on the most recent frame.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Index of the chosen variant (always valid).
    #[must_use]
    pub fn variant_index(&self) -> usize {
        self.variant_index
    }

    /// The chosen variant.
    #[must_use]
    pub fn variant(&self) -> &Variant {
        // variant_index is kept in range and the list is never empty
        &self.variants[self.variant_index.min(self.variants.len() - 1)]
    }

    /// All variants of this card.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Flip assets, if the card has a back face.
    #[must_use]
    pub fn flip_assets(&self) -> Option<&FlipAssets> {
        self.flip_assets.as_ref()
    }

    /// Whether the card shows its back.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Base color of the chosen variant.
    #[must_use]
    pub fn base_color(&self) -> Vec3 {
        Vec3::from_array(self.variant().base_color)
    }

    /// Choose a variant. Out-of-range indices fall back to 0. Returns
    /// `true` if the chosen variant changed.
    pub fn set_variant(&mut self, index: usize) -> bool {
        let index = if index < self.variants.len() {
            index
        } else {
            log::warn!(
                "card {}: variant {index} out of range ({}), using 0",
                self.id,
                self.variants.len()
            );
            0
        };
        let changed = index != self.variant_index;
        self.variant_index = index;
        changed
    }

    /// Advance to the next variant, wrapping around.
    pub fn cycle_variant(&mut self) -> bool {
        self.set_variant((self.variant_index + 1) % self.variants.len())
    }

    /// Face the back (`true`) or the front. Returns `true` if it changed.
    pub fn set_flipped(&mut self, flipped: bool) -> bool {
        if self.flipped == flipped {
            return false;
        }
        self.flipped = flipped;
        true
    }
}
