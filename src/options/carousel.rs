//! Carousel layout and scroll options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Carousel", inline)]
#[serde(default)]
/// Layout, scrolling and snapping parameters.
pub struct CarouselOptions {
    /// Distance between neighbouring slots in world units.
    #[schemars(title = "Slot Width", range(min = 0.2, max = 5.0), extend("step" = 0.05))]
    pub slot_width: f32,
    /// World units scrolled per wheel pixel.
    #[schemars(title = "Wheel Sensitivity", range(min = 0.0005, max = 0.05), extend("step" = 0.0005))]
    pub wheel_sensitivity: f32,
    /// Largest distance one wheel event may scroll, in slots.
    #[schemars(title = "Max Wheel Step", range(min = 0.25, max = 10.0), extend("step" = 0.25))]
    pub max_wheel_slots: f32,
    /// Input-idle time before the carousel snaps to a slot (seconds).
    #[schemars(title = "Snap Delay", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub snap_delay: f32,
    /// Distance under which scrolling counts as converged.
    #[schemars(skip)]
    pub snap_epsilon: f32,
    /// Half-life of scroll motion (seconds).
    #[schemars(title = "Scroll Smoothing", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub scroll_half_life: f32,
    /// Half-life of scroll motion while a finger drags (seconds).
    #[schemars(skip)]
    pub drag_half_life: f32,
    /// How far a drag may pull past the bounds, in slots.
    #[schemars(skip)]
    pub overscroll_slots: f32,
    /// Fraction of finger travel applied while overscrolled.
    #[schemars(skip)]
    pub overscroll_resistance: f32,
    /// Scroll speed while the pointer rests in an edge zone (slots/second).
    #[schemars(title = "Edge Drift", range(min = 0.0, max = 6.0), extend("step" = 0.1))]
    pub edge_drift_slots_per_sec: f32,
    /// Catalogs with at most this many cards never scroll.
    #[schemars(skip)]
    pub static_layout_max: usize,
    /// Viewports narrower than this use the compact profile (pixels).
    #[schemars(title = "Compact Breakpoint", range(min = 320.0, max = 1600.0), extend("step" = 1.0))]
    pub compact_max_width: f32,
    /// Cards fully visible in the compact profile.
    #[schemars(skip)]
    pub compact_visible_cards: usize,
    /// On-screen width budget per card in the wide profile (pixels).
    #[schemars(skip)]
    pub wide_card_px: f32,
    /// Upper limit on fully visible cards.
    #[schemars(skip)]
    pub max_visible_cards: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slot_width: 1.2,
            wheel_sensitivity: 0.005,
            max_wheel_slots: 3.0,
            snap_delay: 0.15,
            snap_epsilon: 0.001,
            scroll_half_life: 0.12,
            drag_half_life: 0.03,
            overscroll_slots: 0.5,
            overscroll_resistance: 0.35,
            edge_drift_slots_per_sec: 1.5,
            static_layout_max: 3,
            compact_max_width: 768.0,
            compact_visible_cards: 1,
            wide_card_px: 420.0,
            max_visible_cards: 5,
        }
    }
}

impl CarouselOptions {
    /// Slot width, falling back to the default for non-positive values.
    #[must_use]
    pub fn effective_slot_width(&self) -> f32 {
        if self.slot_width.is_finite() && self.slot_width > 0.0 {
            self.slot_width
        } else {
            log::warn!(
                "slot_width {} is not positive, using default",
                self.slot_width
            );
            Self::default().slot_width
        }
    }
}
