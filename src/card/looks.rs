//! Target transform and material for each interaction state.
//!
//! Targets are a pure function of state plus a small context, recomputed
//! every frame. Nothing here remembers the previous frame.

use glam::{Vec2, Vec3};

use super::entity::{base_yaw, Material, Transform};
use crate::interaction::InteractionState;
use crate::options::{LookOptions, SurfaceLook};

/// Everything besides the state that shapes a card's target look.
#[derive(Debug, Clone, Copy)]
pub struct LookContext<'a> {
    /// Rest position of the card's slot.
    pub slot: Vec3,
    /// Where the selected card is presented.
    pub stage: Vec3,
    /// -1 if the card sits left of the selected card, +1 if right, 0 when
    /// nothing is selected.
    pub side: f32,
    /// Pointer in normalized device coordinates (`[-1, 1]`, y up).
    pub pointer: Vec2,
    /// Whether the card shows its back.
    pub flipped: bool,
    /// Base color of the card's chosen variant.
    pub base_color: Vec3,
    /// Tunable per-state looks.
    pub looks: &'a LookOptions,
}

/// Rotation of the selected card under pointer tilt.
///
/// Euler (pitch, yaw, roll) for YXZ order: yaw follows pointer x, pitch
/// follows pointer y with the opposite sign so the card leans toward the
/// pointer. The tilt sign does not change when the card is flipped.
#[must_use]
pub fn selected_rotation(pointer: Vec2, flipped: bool, intensity: f32) -> Vec3 {
    let p = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
    Vec3::new(-p.y * intensity, base_yaw(flipped) + p.x * intensity, 0.0)
}

/// Target transform and material for a card in `state`.
#[must_use]
pub fn resolve_targets(
    state: InteractionState,
    ctx: &LookContext<'_>,
) -> (Transform, Material) {
    let looks = ctx.looks;
    let rest = Vec3::new(0.0, base_yaw(ctx.flipped), 0.0);

    let (position, rotation, scale) = match state {
        InteractionState::Idle => (ctx.slot, rest, 1.0),
        InteractionState::Hovered => {
            (ctx.slot + Vec3::Y * looks.hover_lift, rest, 1.0)
        }
        InteractionState::Selected => (
            ctx.stage,
            selected_rotation(ctx.pointer, ctx.flipped, looks.tilt_intensity),
            looks.selected_scale,
        ),
        InteractionState::Dimmed => (
            ctx.slot
                + Vec3::new(
                    ctx.side * looks.dimmed_spread,
                    0.0,
                    -looks.dimmed_push_back,
                ),
            rest,
            looks.dimmed_scale,
        ),
    };

    let surface = surface_for(state, looks);
    let material = Material {
        opacity: if state == InteractionState::Dimmed {
            looks.dimmed_opacity
        } else {
            1.0
        },
        roughness: surface.roughness,
        metalness: surface.metalness,
        emissive: if state == InteractionState::Selected {
            ctx.base_color * looks.selected_emissive
        } else {
            Vec3::ZERO
        },
        base_color: ctx.base_color,
    };

    let transform = Transform {
        position,
        rotation,
        scale: Vec3::splat(scale),
    };
    (transform, material)
}

fn surface_for(state: InteractionState, looks: &LookOptions) -> SurfaceLook {
    match state {
        InteractionState::Idle => looks.idle,
        InteractionState::Hovered => looks.hovered,
        InteractionState::Selected => looks.selected,
        InteractionState::Dimmed => looks.dimmed,
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn ctx(looks: &LookOptions) -> LookContext<'_> {
        LookContext {
            slot: Vec3::new(1.2, 0.0, 0.0),
            stage: Vec3::new(0.0, 0.1, 1.6),
            side: 1.0,
            pointer: Vec2::ZERO,
            flipped: false,
            base_color: Vec3::new(0.8, 0.2, 0.2),
            looks,
        }
    }

    #[test]
    fn idle_rests_on_slot() {
        let looks = LookOptions::default();
        let (t, m) = resolve_targets(InteractionState::Idle, &ctx(&looks));
        assert_eq!(t.position, Vec3::new(1.2, 0.0, 0.0));
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(m.opacity, 1.0);
        assert_eq!(m.emissive, Vec3::ZERO);
    }

    #[test]
    fn hover_lifts_and_polishes() {
        let looks = LookOptions::default();
        let c = ctx(&looks);
        let (idle, idle_m) = resolve_targets(InteractionState::Idle, &c);
        let (hover, hover_m) = resolve_targets(InteractionState::Hovered, &c);
        assert!(hover.position.y > idle.position.y);
        assert!(hover_m.roughness < idle_m.roughness);
        assert!(hover_m.metalness > idle_m.metalness);
    }

    #[test]
    fn selected_goes_to_stage_and_glows() {
        let looks = LookOptions::default();
        let c = ctx(&looks);
        let (t, m) = resolve_targets(InteractionState::Selected, &c);
        assert_eq!(t.position, c.stage);
        assert!(t.scale.x >= 1.0);
        assert!(m.emissive.x > 0.0);
        assert!(m.roughness <= looks.hovered.roughness);
    }

    #[test]
    fn dimmed_is_pushed_back_and_away() {
        let looks = LookOptions::default();
        let c = ctx(&looks);
        let (t, m) = resolve_targets(InteractionState::Dimmed, &c);
        assert!(t.position.z < 0.0);
        assert!(t.position.x > c.slot.x);
        assert_eq!(t.scale, Vec3::splat(0.8));
        assert_eq!(m.opacity, 0.5);
        assert!(m.roughness >= looks.idle.roughness);
    }

    #[test]
    fn tilt_follows_pointer_with_same_sign_when_flipped() {
        let front = selected_rotation(Vec2::new(1.0, 1.0), false, 0.25);
        assert_eq!(front, Vec3::new(-0.25, 0.25, 0.0));

        let back = selected_rotation(Vec2::new(1.0, 1.0), true, 0.25);
        assert!((back.y - (PI + 0.25)).abs() < 1e-6);
        assert_eq!(back.x, front.x);
    }

    #[test]
    fn tilt_clamps_out_of_range_pointer() {
        let r = selected_rotation(Vec2::new(5.0, -3.0), false, 0.25);
        assert_eq!(r, Vec3::new(0.25, 0.25, 0.0));
    }

    #[test]
    fn flipped_cards_rest_facing_back() {
        let looks = LookOptions::default();
        let mut c = ctx(&looks);
        c.flipped = true;
        for state in [
            InteractionState::Idle,
            InteractionState::Hovered,
            InteractionState::Dimmed,
        ] {
            let (t, _) = resolve_targets(state, &c);
            assert_eq!(t.rotation.y, PI);
        }
    }
}
