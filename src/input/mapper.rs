//! Viewport-relative pointer normalization, edge zones and wheel impulses.

use glam::Vec2;

use super::event::WheelDeltaMode;
use crate::carousel::{ScrollDirection, ScrollImpulse};
use crate::options::InputOptions;

/// Horizontal zone of the viewport the pointer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerZone {
    /// Left scroll affordance.
    LeftEdge,
    /// The card area.
    #[default]
    Center,
    /// Right scroll affordance.
    RightEdge,
}

impl PointerZone {
    /// The scroll direction an edge zone drives, `None` for the center.
    #[must_use]
    pub fn scroll_direction(self) -> Option<ScrollDirection> {
        match self {
            Self::LeftEdge => Some(ScrollDirection::Left),
            Self::Center => None,
            Self::RightEdge => Some(ScrollDirection::Right),
        }
    }
}

/// Converts raw pixel input into viewport-relative quantities.
#[derive(Debug, Clone)]
pub struct InputMapper {
    width: f32,
    height: f32,
    edge_margin_px: f32,
    options: InputOptions,
}

impl InputMapper {
    /// Mapper for a viewport of the given size.
    #[must_use]
    pub fn new(options: InputOptions, width: f32, height: f32) -> Self {
        let mut mapper = Self {
            width: 0.0,
            height: 0.0,
            edge_margin_px: 0.0,
            options,
        };
        mapper.resize(width, height);
        mapper
    }

    /// Update the viewport size and recompute the edge margin.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let min = self.options.edge_zone_min_px.max(0.0);
        let max = self.options.edge_zone_max_px.max(min);
        self.edge_margin_px =
            (self.width * self.options.edge_zone_fraction).clamp(min, max);
    }

    /// Replace the options and recompute derived values.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
        self.resize(self.width, self.height);
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Width of each edge zone in pixels.
    #[must_use]
    pub fn edge_margin_px(&self) -> f32 {
        self.edge_margin_px
    }

    /// Pointer position in `[-1, 1]²` with y up. A zero-sized viewport
    /// maps everything to the origin.
    #[must_use]
    pub fn normalize(&self, x: f32, y: f32) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec2::ZERO;
        }
        let n = Vec2::new(
            x / self.width * 2.0 - 1.0,
            1.0 - y / self.height * 2.0,
        );
        if n.is_finite() {
            n.clamp(Vec2::NEG_ONE, Vec2::ONE)
        } else {
            Vec2::ZERO
        }
    }

    /// Zone containing pixel column `x`.
    ///
    /// Viewports narrower than two margins have no center, so they are
    /// treated as all center rather than all edge.
    #[must_use]
    pub fn classify(&self, x: f32) -> PointerZone {
        if !x.is_finite() || self.width <= 2.0 * self.edge_margin_px {
            return PointerZone::Center;
        }
        if x < self.edge_margin_px {
            PointerZone::LeftEdge
        } else if x > self.width - self.edge_margin_px {
            PointerZone::RightEdge
        } else {
            PointerZone::Center
        }
    }

    /// Turn a wheel delta into an impulse along its dominant axis.
    ///
    /// Down and right both scroll toward higher ranks. Zero or non-finite
    /// deltas produce nothing.
    #[must_use]
    pub fn wheel_impulse(
        &self,
        delta_x: f32,
        delta_y: f32,
        mode: WheelDeltaMode,
    ) -> Option<ScrollImpulse> {
        let (delta, page) = if delta_x.abs() > delta_y.abs() {
            (delta_x, self.width)
        } else {
            (delta_y, self.height)
        };
        let px = match mode {
            WheelDeltaMode::Pixel => delta,
            WheelDeltaMode::Line => delta * self.options.line_height_px,
            WheelDeltaMode::Page => delta * page,
        };
        if !px.is_finite() || px == 0.0 {
            return None;
        }
        Some(ScrollImpulse {
            direction: if px > 0.0 {
                ScrollDirection::Right
            } else {
                ScrollDirection::Left
            },
            magnitude_px: px.abs(),
        })
    }
}
