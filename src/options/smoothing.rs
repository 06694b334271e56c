//! Card animation half-lives.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Smoothing", inline)]
#[serde(default)]
/// Card animation half-lives.
///
/// Selection transitions are heavier than hover transitions so that
/// entering or leaving the stage reads as a deliberate motion.
pub struct SmoothingOptions {
    /// Half-life for idle/hover transitions (seconds).
    #[schemars(title = "Hover", range(min = 0.0, max = 0.5), extend("step" = 0.005))]
    pub hover: f32,
    /// Half-life for transitions into or out of a selection (seconds).
    #[schemars(title = "Selection", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub selection: f32,
    /// Per-component distance under which a card counts as settled.
    #[schemars(skip)]
    pub settle_epsilon: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            hover: 0.06,
            selection: 0.16,
            settle_epsilon: 1.0e-4,
        }
    }
}
