//! Pointer, wheel and touch mapping options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer, wheel and touch mapping parameters.
pub struct InputOptions {
    /// Edge-zone width as a fraction of the viewport width.
    #[schemars(title = "Edge Zone", range(min = 0.0, max = 0.4), extend("step" = 0.01))]
    pub edge_zone_fraction: f32,
    /// Lower clamp for the edge-zone width (pixels).
    #[schemars(skip)]
    pub edge_zone_min_px: f32,
    /// Upper clamp for the edge-zone width (pixels).
    #[schemars(skip)]
    pub edge_zone_max_px: f32,
    /// Touch travel before a touch becomes a drag (pixels).
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 40.0), extend("step" = 1.0))]
    pub drag_threshold_px: f32,
    /// Pixels per wheel line (DOM `deltaMode == 1`).
    #[schemars(skip)]
    pub line_height_px: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            edge_zone_fraction: 0.12,
            edge_zone_min_px: 48.0,
            edge_zone_max_px: 160.0,
            drag_threshold_px: 6.0,
            line_height_px: 16.0,
        }
    }
}
