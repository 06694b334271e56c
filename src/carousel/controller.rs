//! Scroll position, bounds and snapping of the carousel.

use super::layout::{Layout, ScrollBounds};
use crate::animation::damp;
use crate::options::CarouselOptions;

/// Horizontal scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward lower ranks.
    Left,
    /// Toward higher ranks.
    Right,
}

impl ScrollDirection {
    /// `-1.0` for left, `+1.0` for right.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// A normalized scroll request from a wheel or trackpad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollImpulse {
    /// Which way to scroll.
    pub direction: ScrollDirection,
    /// Size of the request in pixels.
    pub magnitude_px: f32,
}

/// What is currently driving the scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// At rest on a slot.
    #[default]
    Idle,
    /// Wheel, key or edge-hover input is moving the target.
    UserDriven,
    /// A touch drag owns the target; it may overscroll the bounds.
    Dragging,
    /// Settling onto the nearest slot.
    Snapping,
}

/// Owns the carousel scroll state.
///
/// `target` stays inside [`bounds`](Self::bounds) at all times except
/// during a touch drag; `position` damps toward `target` every tick.
#[derive(Debug, Clone)]
pub struct ScrollController {
    position: f32,
    target: f32,
    phase: ScrollPhase,
    idle_time: f32,
    edge: Option<ScrollDirection>,
    /// Edge drift reached a bound; cleared when the edge or bounds change.
    edge_spent: bool,
    focus: Option<usize>,
    drag_raw: f32,
    count: usize,
    layout: Layout,
    browse: ScrollBounds,
    options: CarouselOptions,
}

impl ScrollController {
    /// Controller at rest on the clamped center of the carousel.
    #[must_use]
    pub fn new(options: CarouselOptions, layout: Layout, count: usize) -> Self {
        let mut scroll = Self {
            position: 0.0,
            target: 0.0,
            phase: ScrollPhase::Idle,
            idle_time: 0.0,
            edge: None,
            edge_spent: false,
            focus: None,
            drag_raw: 0.0,
            count,
            layout,
            browse: ScrollBounds::ZERO,
            options,
        };
        scroll.recompute_bounds();
        scroll.target = scroll.snap_target();
        scroll.position = scroll.target;
        scroll
    }

    /// Scroll position as rendered this frame.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Position the scroll is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Whether user input is currently moving the carousel.
    #[must_use]
    pub fn is_user_scrolling(&self) -> bool {
        matches!(self.phase, ScrollPhase::UserDriven | ScrollPhase::Dragging)
    }

    /// Edge the pointer is hovering, if any.
    #[must_use]
    pub fn edge_hover(&self) -> Option<ScrollDirection> {
        self.edge
    }

    /// Rank the carousel is locked onto by a selection.
    #[must_use]
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Bounds for free browsing.
    #[must_use]
    pub fn browse_bounds(&self) -> ScrollBounds {
        self.browse
    }

    /// Bounds currently in force: the full slot span while a selection
    /// holds focus, the browse bounds otherwise.
    #[must_use]
    pub fn bounds(&self) -> ScrollBounds {
        if self.focus.is_some() {
            self.layout.full_span(self.count)
        } else {
            self.browse
        }
    }

    /// Apply a wheel impulse. Ignored while a selection holds focus.
    pub fn wheel(&mut self, impulse: ScrollImpulse) {
        if self.focus.is_some() || !impulse.magnitude_px.is_finite() {
            return;
        }
        let w = self.layout.slot_width;
        let step = (impulse.magnitude_px.abs() * self.options.wheel_sensitivity)
            .min(self.options.max_wheel_slots * w);
        self.nudge(impulse.direction.sign() * step);
    }

    /// Move the target to the slot next to the one nearest the target.
    pub fn step(&mut self, direction: ScrollDirection) {
        if self.focus.is_some() {
            return;
        }
        let Some(rank) = self.layout.nearest_rank(self.target, self.count)
        else {
            return;
        };
        let next = match direction {
            ScrollDirection::Left => rank.saturating_sub(1),
            ScrollDirection::Right => (rank + 1).min(self.count - 1),
        };
        let slot = self.layout.slot_position(next, self.count);
        self.set_user_target(self.browse.clamp(slot));
    }

    /// Follow a touch drag by `delta_px` horizontal pixels. The first call
    /// of a drag enters [`ScrollPhase::Dragging`].
    pub fn drag(&mut self, delta_px: f32) {
        if self.focus.is_some() || !delta_px.is_finite() {
            return;
        }
        if self.phase != ScrollPhase::Dragging {
            self.set_phase(ScrollPhase::Dragging);
            self.drag_raw = self.target;
        }
        // content follows the finger, so a leftward swipe scrolls right
        self.drag_raw -= delta_px * self.layout.world_per_px();
        self.target = self.rubber_band(self.drag_raw);
        self.idle_time = 0.0;
    }

    /// Finish a touch drag; the target snaps back inside the bounds.
    pub fn end_drag(&mut self) {
        if self.phase == ScrollPhase::Dragging {
            self.set_phase(ScrollPhase::Snapping);
            self.target = self.snap_target();
        }
    }

    /// Set the hovered edge zone. Drift happens in [`tick`](Self::tick).
    pub fn set_edge_hover(&mut self, edge: Option<ScrollDirection>) {
        if edge != self.edge {
            self.edge_spent = false;
        }
        self.edge = edge;
    }

    /// Lock onto display rank `rank` (a card was selected): retarget to its
    /// slot immediately, bypassing the snap delay.
    pub fn focus_rank(&mut self, rank: usize) {
        if rank >= self.count {
            return;
        }
        self.focus = Some(rank);
        self.set_phase(ScrollPhase::Snapping);
        self.target = self.snap_target();
    }

    /// Drop the selection lock and return to the browse bounds.
    pub fn release_focus(&mut self) {
        if self.focus.take().is_some() {
            self.set_phase(ScrollPhase::Snapping);
            self.target = self.snap_target();
        }
    }

    /// Apply a new layout (viewport resize). The target is re-clamped; the
    /// rendered position is left to damp.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.recompute_bounds();
    }

    /// Apply a new card count.
    pub fn set_card_count(&mut self, count: usize) {
        self.count = count;
        if self.focus.is_some_and(|rank| rank >= count) {
            self.focus = None;
        }
        self.recompute_bounds();
    }

    /// Apply new options. The caller supplies the matching layout through
    /// [`set_layout`](Self::set_layout).
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
        self.recompute_bounds();
    }

    /// Advance one frame. Returns `true` while the position is moving or
    /// input still owns the target.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return self.position != self.target;
        }

        if let (Some(dir), None) = (self.edge, self.focus) {
            if self.phase != ScrollPhase::Dragging && !self.edge_spent {
                let drift = self.options.edge_drift_slots_per_sec
                    * self.layout.slot_width
                    * dt;
                let before = self.target;
                self.nudge(dir.sign() * drift);
                self.edge_spent = self.target == before;
            }
        }

        match self.phase {
            ScrollPhase::UserDriven => {
                self.idle_time += dt;
                if self.idle_time >= self.options.snap_delay {
                    self.set_phase(ScrollPhase::Snapping);
                    self.target = self.snap_target();
                }
            }
            ScrollPhase::Snapping => self.target = self.snap_target(),
            ScrollPhase::Idle | ScrollPhase::Dragging => {}
        }

        let half_life = if self.phase == ScrollPhase::Dragging {
            self.options.drag_half_life
        } else {
            self.options.scroll_half_life
        };
        self.position = damp(self.position, self.target, half_life, dt);

        if (self.position - self.target).abs() < self.options.snap_epsilon {
            self.position = self.target;
            if self.phase == ScrollPhase::Snapping {
                self.set_phase(ScrollPhase::Idle);
            }
        }

        self.phase != ScrollPhase::Idle || self.position != self.target
    }

    /// Rest point: the focused slot, or the slot nearest the rendered
    /// position clamped into the browse bounds.
    fn snap_target(&self) -> f32 {
        if let Some(rank) = self.focus {
            return self.layout.slot_position(rank, self.count);
        }
        self.layout
            .nearest_rank(self.position, self.count)
            .map_or(0.0, |rank| {
                self.browse.clamp(self.layout.slot_position(rank, self.count))
            })
    }

    fn nudge(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let next = self.bounds().clamp(self.target + delta);
        if next != self.target {
            self.set_user_target(next);
        }
    }

    fn set_user_target(&mut self, target: f32) {
        self.target = target;
        self.idle_time = 0.0;
        self.edge_spent = false;
        if self.phase != ScrollPhase::Dragging {
            self.set_phase(ScrollPhase::UserDriven);
        }
    }

    fn rubber_band(&self, raw: f32) -> f32 {
        let b = self.bounds();
        let limit = self.options.overscroll_slots * self.layout.slot_width;
        let k = self.options.overscroll_resistance;
        if raw < b.min {
            b.min - ((b.min - raw) * k).min(limit)
        } else if raw > b.max {
            b.max + ((raw - b.max) * k).min(limit)
        } else {
            raw
        }
    }

    fn recompute_bounds(&mut self) {
        self.edge_spent = false;
        self.browse = self
            .layout
            .browse_bounds(self.count, self.options.static_layout_max);
        if self.phase == ScrollPhase::Dragging {
            self.drag_raw = self.bounds().clamp(self.drag_raw);
        }
        let bounds = self.bounds();
        let clamped = bounds.clamp(self.target);
        if clamped != self.target {
            log::debug!(
                "scroll target {:.3} re-clamped to {clamped:.3}",
                self.target
            );
            self.target = clamped;
        }
        if self.focus.is_some() {
            self.target = self.snap_target();
        }
    }

    fn set_phase(&mut self, phase: ScrollPhase) {
        if self.phase != phase {
            log::debug!("scroll phase {:?} -> {phase:?}", self.phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn controller(width: f32, count: usize) -> ScrollController {
        let options = CarouselOptions::default();
        let layout = Layout::for_viewport(width, 800.0, &options);
        ScrollController::new(options, layout, count)
    }

    fn settle(scroll: &mut ScrollController) {
        let mut frames = 0;
        while scroll.tick(DT) {
            frames += 1;
            assert!(frames < 10_000, "scroll never settled");
        }
    }

    fn right(px: f32) -> ScrollImpulse {
        ScrollImpulse {
            direction: ScrollDirection::Right,
            magnitude_px: px,
        }
    }

    #[test]
    fn wheel_step_is_scaled_and_capped() {
        let mut s = controller(1400.0, 10);
        let start = s.target();
        s.wheel(right(240.0));
        assert!((s.target() - start - 1.2).abs() < 1e-5);
        assert_eq!(s.phase(), ScrollPhase::UserDriven);

        let mut s = controller(1400.0, 40);
        let start = s.target();
        s.wheel(right(100_000.0));
        assert!((s.target() - start - 3.6).abs() < 1e-4);
    }

    #[test]
    fn wheel_clamps_to_bounds() {
        let mut s = controller(1400.0, 10);
        for _ in 0..20 {
            s.wheel(right(2400.0));
        }
        assert_eq!(s.target(), s.bounds().max);
    }

    fn tick_until_snapping(scroll: &mut ScrollController, dt: f32) {
        let mut frames = 0;
        while scroll.phase() != ScrollPhase::Snapping {
            let _ = scroll.tick(dt);
            frames += 1;
            assert!(frames < 10_000, "scroll never started snapping");
        }
    }

    #[test]
    fn idle_input_snaps_to_nearest_slot() {
        let mut s = controller(1400.0, 10);
        // slots for 10 cards sit at odd multiples of 0.6
        assert!((s.target() - 0.6).abs() < 1e-5);
        s.step(ScrollDirection::Right);
        assert!((s.target() - 1.8).abs() < 1e-5);
        settle(&mut s);
        assert_eq!(s.phase(), ScrollPhase::Idle);
        assert!((s.position() - 1.8).abs() < 1e-5);
        assert_eq!(s.position(), s.target());
    }

    #[test]
    fn snap_follows_rendered_position_not_target() {
        let mut s = controller(1400.0, 10);
        s.wheel(right(200.0));
        assert!((s.target() - 1.6).abs() < 1e-5);
        tick_until_snapping(&mut s, 1.0 / 600.0);

        let position = s.position();
        let rank = s.layout().nearest_rank(position, 10).unwrap();
        let from_position = s.browse_bounds().clamp(s.layout().slot_position(rank, 10));
        // the position still lags behind, closer to the slot it started on
        assert!(position < 1.2);
        assert!((from_position - 0.6).abs() < 1e-5);
        assert_eq!(s.target(), from_position);

        settle(&mut s);
        assert_eq!(s.position(), from_position);
    }

    #[test]
    fn step_moves_one_slot() {
        let mut s = controller(1400.0, 10);
        let start = s.target();
        s.step(ScrollDirection::Right);
        assert!((s.target() - start - 1.2).abs() < 1e-5);
        s.step(ScrollDirection::Left);
        s.step(ScrollDirection::Left);
        assert!((s.target() - start + 1.2).abs() < 1e-5);
    }

    #[test]
    fn focus_centers_rank_even_outside_browse_bounds() {
        let mut s = controller(1400.0, 10);
        s.focus_rank(0);
        let slot0 = s.layout().slot_position(0, 10);
        assert_eq!(s.target(), slot0);
        assert!(slot0 < s.browse_bounds().min);
        settle(&mut s);
        assert_eq!(s.position(), slot0);

        s.wheel(right(240.0));
        assert_eq!(s.target(), slot0);

        s.release_focus();
        assert_eq!(s.target(), s.browse_bounds().min);
    }

    #[test]
    fn drag_overscrolls_with_resistance_then_clamps() {
        let mut s = controller(600.0, 6);
        let max = s.bounds().max;
        for _ in 0..200 {
            s.drag(-50.0);
            let _ = s.tick(DT);
        }
        assert_eq!(s.phase(), ScrollPhase::Dragging);
        let limit = 0.5 * 1.2;
        assert!(s.target() > max);
        assert!(s.target() <= max + limit + 1e-5);

        s.end_drag();
        assert_eq!(s.target(), max);
        settle(&mut s);
        assert_eq!(s.position(), max);
    }

    #[test]
    fn edge_hover_drifts_until_bound() {
        let mut s = controller(1400.0, 10);
        s.set_edge_hover(Some(ScrollDirection::Left));
        for _ in 0..600 {
            let _ = s.tick(DT);
        }
        assert!((s.target() - s.bounds().min).abs() < 1e-5);
        s.set_edge_hover(None);
        settle(&mut s);
        assert_eq!(s.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn edge_hover_at_bound_settles_and_resumes_after_leaving() {
        let mut s = controller(1400.0, 10);
        s.set_edge_hover(Some(ScrollDirection::Right));
        settle(&mut s);
        assert_eq!(s.phase(), ScrollPhase::Idle);
        assert_eq!(s.target(), s.bounds().max);

        s.set_edge_hover(Some(ScrollDirection::Left));
        let _ = s.tick(DT);
        assert!(s.target() < s.bounds().max);
    }

    #[test]
    fn resize_reclamps_by_violation_only() {
        let options = CarouselOptions::default();
        let compact = Layout::for_viewport(600.0, 800.0, &options);
        let wide = Layout::for_viewport(1400.0, 800.0, &options);
        let mut s = ScrollController::new(options, compact, 6);
        for _ in 0..10 {
            s.step(ScrollDirection::Right);
            settle(&mut s);
        }
        let before = s.target();
        assert_eq!(before, s.bounds().max);
        let position_before = s.position();

        s.set_layout(wide);
        let bounds = s.bounds();
        assert!(bounds.contains(s.target(), 0.0));
        assert!(
            (before - s.target() - wide.browse_bounds(6, 3).violation(before))
                .abs()
                < 1e-5
        );
        assert_eq!(s.position(), position_before);
    }

    #[test]
    fn degenerate_inputs_stay_finite() {
        let mut s = controller(1400.0, 0);
        s.wheel(right(f32::NAN));
        s.wheel(right(240.0));
        s.step(ScrollDirection::Right);
        s.drag(f32::INFINITY);
        let _ = s.tick(DT);
        let _ = s.tick(f32::NAN);
        assert_eq!(s.target(), 0.0);
        assert!(s.position().is_finite());
    }
}
