//! Slot geometry and scroll bounds for a given viewport.

use crate::options::CarouselOptions;

/// Which layout profile the viewport calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutProfile {
    /// Narrow (phone-sized) viewport: one card in view, camera pulled back.
    Compact,
    /// Desktop viewport.
    #[default]
    Wide,
}

/// Closed interval the scroll target is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    /// Leftmost allowed scroll position.
    pub min: f32,
    /// Rightmost allowed scroll position.
    pub max: f32,
}

impl ScrollBounds {
    /// The single point `[0, 0]`.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Clamp `x` into the bounds. Non-finite input maps to the nearest
    /// finite bound (NaN maps to `min`).
    #[must_use]
    pub fn clamp(&self, x: f32) -> f32 {
        if x.is_nan() {
            return self.min;
        }
        x.clamp(self.min, self.max)
    }

    /// Whether `x` lies inside the bounds, allowing `tolerance`.
    #[must_use]
    pub fn contains(&self, x: f32, tolerance: f32) -> bool {
        x >= self.min - tolerance && x <= self.max + tolerance
    }

    /// Whether the bounds collapse to a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Distance `x` lies outside the bounds (0 when inside).
    #[must_use]
    pub fn violation(&self, x: f32) -> f32 {
        (self.min - x).max(x - self.max).max(0.0)
    }
}

/// Viewport-derived layout: profile, visible cards and slot spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Compact or wide.
    pub profile: LayoutProfile,
    /// Cards fully in view at once (at least 1).
    pub visible_cards: usize,
    /// World-space distance between adjacent slots.
    pub slot_width: f32,
    /// Viewport width in physical pixels.
    pub width: f32,
    /// Viewport height in physical pixels.
    pub height: f32,
}

impl Layout {
    /// Derive the layout for a viewport. Non-finite or negative sizes are
    /// treated as zero, which selects the compact profile.
    #[must_use]
    pub fn for_viewport(
        width: f32,
        height: f32,
        options: &CarouselOptions,
    ) -> Self {
        let width = sanitize_px(width);
        let height = sanitize_px(height);
        let (profile, visible) = if width < options.compact_max_width {
            (LayoutProfile::Compact, options.compact_visible_cards)
        } else {
            let fit = if options.wide_card_px > 0.0 {
                (width / options.wide_card_px).floor() as usize
            } else {
                options.max_visible_cards
            };
            (LayoutProfile::Wide, fit.min(options.max_visible_cards))
        };
        Self {
            profile,
            visible_cards: visible.max(1),
            slot_width: options.effective_slot_width(),
            width,
            height,
        }
    }

    /// Viewport aspect ratio, 1.0 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Scroll position at which display rank `rank` of `count` is
    /// centered. Ranks are spaced `slot_width` apart around 0.
    #[must_use]
    pub fn slot_position(&self, rank: usize, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let center = (count - 1) as f32 / 2.0;
        (rank as f32 - center) * self.slot_width
    }

    /// Rank whose slot is nearest to `x`, or `None` with no cards.
    #[must_use]
    pub fn nearest_rank(&self, x: f32, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        if !x.is_finite() {
            return Some(if x > 0.0 { count - 1 } else { 0 });
        }
        let center = (count - 1) as f32 / 2.0;
        let rank = (x / self.slot_width + center).round();
        Some(rank.clamp(0.0, (count - 1) as f32) as usize)
    }

    /// Span from the first to the last slot.
    #[must_use]
    pub fn full_span(&self, count: usize) -> ScrollBounds {
        if count == 0 {
            return ScrollBounds::ZERO;
        }
        ScrollBounds {
            min: self.slot_position(0, count),
            max: self.slot_position(count - 1, count),
        }
    }

    /// Bounds for free browsing.
    ///
    /// Small carousels (no more cards than fit, or at most
    /// `static_layout_max`) do not scroll at all. Otherwise the ends are
    /// inset so the outermost cards stop at the edge of the visible span.
    #[must_use]
    pub fn browse_bounds(
        &self,
        count: usize,
        static_layout_max: usize,
    ) -> ScrollBounds {
        if count <= self.visible_cards.max(static_layout_max) {
            return ScrollBounds::ZERO;
        }
        let inset = (self.visible_cards - 1) as f32 / 2.0 * self.slot_width;
        let span = self.full_span(count);
        ScrollBounds {
            min: span.min + inset,
            max: span.max - inset,
        }
    }

    /// World units per horizontal pixel, for finger-follow dragging.
    #[must_use]
    pub fn world_per_px(&self) -> f32 {
        if self.width > 0.0 {
            self.visible_cards as f32 * self.slot_width / self.width
        } else {
            0.0
        }
    }
}

fn sanitize_px(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
