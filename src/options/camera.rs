//! Camera framing options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, per-mode framing and smoothing parameters.
///
/// Eye and look-at offsets are relative to the carousel focus on X.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye offset during the intro reveal.
    #[schemars(skip)]
    pub intro_eye: [f32; 3],
    /// Look-at offset during the intro reveal.
    #[schemars(skip)]
    pub intro_look: [f32; 3],
    /// Eye offset while browsing.
    #[schemars(skip)]
    pub browse_eye: [f32; 3],
    /// Look-at offset while browsing.
    #[schemars(skip)]
    pub browse_look: [f32; 3],
    /// Eye offset while a card is on stage.
    #[schemars(skip)]
    pub selected_eye: [f32; 3],
    /// Look-at offset while a card is on stage.
    #[schemars(skip)]
    pub selected_look: [f32; 3],
    /// Half-life of intro motion (seconds).
    #[schemars(title = "Intro Smoothing", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub intro_half_life: f32,
    /// Half-life while browsing (seconds).
    #[schemars(title = "Browse Smoothing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub browse_half_life: f32,
    /// Half-life while a card is on stage (seconds).
    #[schemars(title = "Selection Smoothing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub selected_half_life: f32,
    /// Seconds before the intro hands over to browsing on its own.
    #[schemars(title = "Intro Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub intro_duration: f32,
    /// Eye distance multiplier in the compact (narrow viewport) profile.
    #[schemars(skip)]
    pub compact_distance_scale: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 0.1,
            zfar: 100.0,
            intro_eye: [0.0, 3.5, 14.0],
            intro_look: [0.0, 0.0, 0.0],
            browse_eye: [0.0, 0.3, 6.5],
            browse_look: [0.0, 0.0, 0.0],
            selected_eye: [0.0, 0.15, 4.6],
            selected_look: [0.0, 0.1, 1.6],
            intro_half_life: 0.8,
            browse_half_life: 0.2,
            selected_half_life: 0.1,
            intro_duration: 1.5,
            compact_distance_scale: 1.35,
        }
    }
}
