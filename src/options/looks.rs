//! Per-state look targets for the card animator.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
/// Surface response for one interaction state.
pub struct SurfaceLook {
    /// PBR roughness.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// PBR metalness.
    #[schemars(title = "Metalness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub metalness: f32,
}

impl SurfaceLook {
    const fn new(roughness: f32, metalness: f32) -> Self {
        Self {
            roughness,
            metalness,
        }
    }
}

const IDLE_SURFACE: SurfaceLook = SurfaceLook::new(0.5, 0.2);
const HOVERED_SURFACE: SurfaceLook = SurfaceLook::new(0.35, 0.35);
const SELECTED_SURFACE: SurfaceLook = SurfaceLook::new(0.2, 0.5);
const DIMMED_SURFACE: SurfaceLook = SurfaceLook::new(0.8, 0.05);

/// A surface table as written in a file; missing keys keep the state's
/// own default.
#[derive(Deserialize)]
struct SurfacePatch {
    roughness: Option<f32>,
    metalness: Option<f32>,
}

fn merge_surface<'de, D: Deserializer<'de>>(
    deserializer: D,
    base: SurfaceLook,
) -> Result<SurfaceLook, D::Error> {
    let patch = SurfacePatch::deserialize(deserializer)?;
    Ok(SurfaceLook {
        roughness: patch.roughness.unwrap_or(base.roughness),
        metalness: patch.metalness.unwrap_or(base.metalness),
    })
}

fn idle_surface<'de, D: Deserializer<'de>>(d: D) -> Result<SurfaceLook, D::Error> {
    merge_surface(d, IDLE_SURFACE)
}

fn hovered_surface<'de, D: Deserializer<'de>>(d: D) -> Result<SurfaceLook, D::Error> {
    merge_surface(d, HOVERED_SURFACE)
}

fn selected_surface<'de, D: Deserializer<'de>>(d: D) -> Result<SurfaceLook, D::Error> {
    merge_surface(d, SELECTED_SURFACE)
}

fn dimmed_surface<'de, D: Deserializer<'de>>(d: D) -> Result<SurfaceLook, D::Error> {
    merge_surface(d, DIMMED_SURFACE)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Looks", inline)]
#[serde(default)]
/// Per-state target transform and material parameters.
///
/// Values are tunable; the relations between states (hover lifts,
/// selection is the glossiest, dimmed cards shrink, fade and roughen) are
/// what the animator relies on.
pub struct LookOptions {
    /// Upward lift of a hovered card.
    #[schemars(title = "Hover Lift", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub hover_lift: f32,
    /// Stage position relative to the carousel focus (x offset, y, z).
    #[schemars(skip)]
    pub stage_offset: [f32; 3],
    /// Scale of the selected card.
    #[schemars(title = "Selected Scale", range(min = 1.0, max = 2.0), extend("step" = 0.01))]
    pub selected_scale: f32,
    /// Scale of cards dimmed by another selection.
    #[schemars(title = "Dimmed Scale", range(min = 0.3, max = 1.0), extend("step" = 0.01))]
    pub dimmed_scale: f32,
    /// Opacity of cards dimmed by another selection.
    #[schemars(title = "Dimmed Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub dimmed_opacity: f32,
    /// How far dimmed cards recede along -Z.
    #[schemars(skip)]
    pub dimmed_push_back: f32,
    /// How far dimmed cards move sideways away from the stage.
    #[schemars(skip)]
    pub dimmed_spread: f32,
    /// Pointer tilt of the selected card at the viewport edge (radians).
    #[schemars(title = "Tilt Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub tilt_intensity: f32,
    /// Emissive strength of the selected card, as a fraction of its base color.
    #[schemars(skip)]
    pub selected_emissive: f32,
    /// Surface of idle cards.
    #[schemars(skip)]
    #[serde(deserialize_with = "idle_surface")]
    pub idle: SurfaceLook,
    /// Surface of hovered cards.
    #[schemars(skip)]
    #[serde(deserialize_with = "hovered_surface")]
    pub hovered: SurfaceLook,
    /// Surface of the selected card.
    #[schemars(skip)]
    #[serde(deserialize_with = "selected_surface")]
    pub selected: SurfaceLook,
    /// Surface of dimmed cards.
    #[schemars(skip)]
    #[serde(deserialize_with = "dimmed_surface")]
    pub dimmed: SurfaceLook,
}

impl Default for LookOptions {
    fn default() -> Self {
        Self {
            hover_lift: 0.15,
            stage_offset: [0.0, 0.1, 1.6],
            selected_scale: 1.15,
            dimmed_scale: 0.8,
            dimmed_opacity: 0.5,
            dimmed_push_back: 1.2,
            dimmed_spread: 0.6,
            tilt_intensity: 0.25,
            selected_emissive: 0.08,
            idle: IDLE_SURFACE,
            hovered: HOVERED_SURFACE,
            selected: SELECTED_SURFACE,
            dimmed: DIMMED_SURFACE,
        }
    }
}
