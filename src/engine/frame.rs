//! The per-frame tick of CarouselEngine.
//!
//! Order within a frame: scroll controller → state resolver → card
//! animator → camera → scene writes. Every target is derived from the
//! state as it stands at the start of the tick.

use glam::{Vec2, Vec3};

use super::CarouselEngine;
use crate::card::animator;
use crate::card::{
    resolve_targets, CardEntity, CardId, LookContext, Material, Transform,
};
use crate::carousel::{Layout, ScrollPhase};
use crate::interaction::{resolve, InteractionState, PointerContext};
use crate::options::LookOptions;
use crate::scene::SceneSink;

/// Layout facts shared by every card in one frame.
struct FrameLayout {
    layout: Layout,
    count: usize,
    selected_rank: Option<usize>,
}

impl FrameLayout {
    fn slot(&self, rank: usize) -> Vec3 {
        Vec3::new(self.layout.slot_position(rank, self.count), 0.0, 0.0)
    }

    fn stage_x(&self) -> Option<f32> {
        self.selected_rank
            .map(|r| self.layout.slot_position(r, self.count))
    }

    fn side(&self, rank: usize) -> f32 {
        match self.selected_rank {
            Some(s) if rank < s => -1.0,
            Some(s) if rank > s => 1.0,
            _ => 0.0,
        }
    }

    fn targets(
        &self,
        card: &CardEntity,
        rank: usize,
        state: InteractionState,
        pointer: Vec2,
        looks: &LookOptions,
    ) -> (Transform, Material) {
        let stage = Vec3::new(self.stage_x().unwrap_or(0.0), 0.0, 0.0)
            + Vec3::from_array(looks.stage_offset);
        let ctx = LookContext {
            slot: self.slot(rank),
            stage,
            side: self.side(rank),
            pointer,
            flipped: card.is_flipped(),
            base_color: card.base_color(),
            looks,
        };
        resolve_targets(state, &ctx)
    }
}

impl CarouselEngine {
    /// Advance one frame of `dt` seconds and write the result to `sink`.
    ///
    /// Never blocks and never fails. Non-finite or negative `dt` is
    /// treated as zero: state is resolved and written but nothing moves.
    pub fn tick<S: SceneSink + ?Sized>(&mut self, dt: f32, sink: &mut S) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.frame += 1;

        let scroll_moving = self.scroll.tick(dt);

        let active = self.selected();
        let frame = self.frame_layout(active);
        let pointer = self.pointer_context();

        let looks = &self.options.looks;
        let smoothing = &self.options.smoothing;
        let mut cards_moving = false;
        for (rank, card) in self.cards.iter_mut().enumerate() {
            let state = resolve(card.id(), active, &pointer);
            let targets = frame.targets(card, rank, state, self.pointer, looks);
            if animator::animate(card, state, targets, smoothing, dt) {
                cards_moving = true;
            }
        }

        let camera_moving = self.camera.tick(
            dt,
            frame.stage_x(),
            self.scroll.position(),
            frame.layout.profile,
            &self.options.camera,
        );

        for card in self.cards.iter() {
            if let Some(node) = self.bindings.node(card.id()) {
                sink.write_card(
                    node,
                    card.id(),
                    &card.transform.current,
                    &card.material.current,
                );
            }
        }
        sink.write_camera(self.camera.camera());

        self.animating = scroll_moving || cards_moving || camera_moving;
    }

    /// Put every card straight onto its current target.
    pub(super) fn place_all(&mut self) {
        let ids = self.cards.ids();
        for id in ids {
            self.place_card(id);
        }
    }

    /// Put one card straight onto its current target.
    pub(super) fn place_card(&mut self, id: CardId) {
        let active = self.selected();
        let frame = self.frame_layout(active);
        let pointer = self.pointer_context();
        let Some(rank) = self.cards.rank(id) else {
            return;
        };
        let looks = &self.options.looks;
        let Some(card) = self.cards.get_mut(id) else {
            return;
        };
        let state = resolve(id, active, &pointer);
        let targets = frame.targets(card, rank, state, self.pointer, looks);
        animator::place(card, state, targets);
    }

    fn frame_layout(&self, active: Option<CardId>) -> FrameLayout {
        FrameLayout {
            layout: *self.scroll.layout(),
            count: self.cards.len(),
            selected_rank: active.and_then(|id| self.cards.rank(id)),
        }
    }

    fn pointer_context(&self) -> PointerContext {
        PointerContext {
            hovered: self.hovered,
            zone: self.zone,
            dragging: self.scroll.phase() == ScrollPhase::Dragging
                || self.input.is_touch_dragging(),
        }
    }
}
