use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::carousel::ScrollPhase;
use crate::catalog::CardSpec;
use crate::input::{InputEvent, MouseButton, WheelDeltaMode};
use crate::interaction::GestureId;
use crate::scene::FrameRecorder;

const DT: f32 = 1.0 / 60.0;

fn engine(count: u32, width: f32) -> CarouselEngine {
    CarouselEngine::new(
        &Catalog::sequential(count),
        Options::default(),
        width,
        800.0,
    )
}

fn run(e: &mut CarouselEngine, frames: usize) -> FrameRecorder {
    let mut sink = FrameRecorder::new();
    for _ in 0..frames {
        e.tick(DT, &mut sink);
    }
    sink
}

fn settle(e: &mut CarouselEngine) -> FrameRecorder {
    let mut sink = FrameRecorder::new();
    e.tick(DT, &mut sink);
    let mut frames = 0;
    while e.is_animating() {
        e.tick(DT, &mut sink);
        frames += 1;
        assert!(frames < 20_000, "engine never settled");
    }
    sink
}

fn states(e: &CarouselEngine) -> Vec<InteractionState> {
    e.cards().iter().map(CardEntity::state).collect()
}

fn click(e: &mut CarouselEngine, card: Option<CardId>) {
    e.set_hovered(card);
    e.handle_input(InputEvent::PointerButton {
        button: MouseButton::Left,
        pressed: true,
    });
    e.handle_input(InputEvent::PointerButton {
        button: MouseButton::Left,
        pressed: false,
    });
}

fn wheel(delta_y: f32) -> InputEvent {
    InputEvent::Wheel {
        delta_x: 0.0,
        delta_y,
        mode: WheelDeltaMode::Pixel,
    }
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn selecting_middle_of_five_centers_it_and_dims_the_rest() {
    let mut e = engine(5, 1400.0);
    assert_eq!(e.options().carousel.slot_width, 1.2);
    e.execute(CarouselCommand::Step {
        direction: crate::carousel::ScrollDirection::Right,
    });
    assert!((e.scroll().target() - 1.2).abs() < 1e-5);

    assert!(e.select(CardId(2)));
    assert_eq!(e.scroll().target(), 0.0);

    let _ = run(&mut e, 1);
    let selected = e.card(CardId(2)).unwrap();
    assert_eq!(selected.state(), InteractionState::Selected);
    assert_eq!(selected.transform.target.position, Vec3::new(0.0, 0.1, 1.6));
    for id in [0, 1, 3, 4] {
        let card = e.card(CardId(id)).unwrap();
        assert_eq!(card.state(), InteractionState::Dimmed);
        assert_eq!(card.material.target.opacity, 0.5);
    }

    let sink = settle(&mut e);
    assert_eq!(e.scroll().position(), 0.0);
    assert_eq!(sink.material(CardId(0)).unwrap().opacity, 0.5);
    assert_eq!(
        sink.transform(CardId(2)).unwrap().position,
        Vec3::new(0.0, 0.1, 1.6)
    );
}

#[test]
fn wheel_moves_at_most_three_slots_and_stays_in_bounds() {
    let mut e = engine(10, 1400.0);
    let w = e.options().carousel.slot_width;
    let start = e.scroll().target();

    e.handle_input(wheel(240.0));
    let moved = e.scroll().target() - start;
    assert!(moved > 0.0);
    assert!(moved <= 3.0 * w + 1e-5);

    for _ in 0..5 {
        let before = e.scroll().target();
        e.handle_input(wheel(24_000.0));
        assert!(e.scroll().target() - before <= 3.0 * w + 1e-5);
        assert!(e.scroll().bounds().contains(e.scroll().target(), 1e-5));
    }
    assert_eq!(e.scroll().target(), e.scroll().bounds().max);
}

#[test]
fn resize_reclamps_target_by_at_most_the_violation() {
    let mut e = engine(6, 1400.0);
    let wide = e.scroll().bounds();
    e.resize(600.0, 800.0);
    let compact = e.scroll().bounds();
    assert_ne!(wide, compact);
    assert!(compact.min < wide.min && compact.max > wide.max);

    // push to the compact right bound, then widen the viewport again
    for _ in 0..10 {
        e.handle_key_press("ArrowRight");
        let _ = settle(&mut e);
    }
    let before = e.scroll().target();
    assert_eq!(before, compact.max);
    let position = e.scroll().position();
    e.resize(1400.0, 800.0);
    let after = e.scroll().target();
    let violation = e.scroll().bounds().violation(before);
    assert!(violation > 0.0);
    assert!((before - after - violation).abs() < 1e-5);
    assert_eq!(e.scroll().position(), position);
    assert_eq!(e.camera().aspect, 1400.0 / 800.0);
}

// ── Selection ──────────────────────────────────────────────────────────

#[test]
fn selecting_any_card_converges_scroll_onto_its_slot() {
    for count in [2_u32, 5, 9] {
        for id in 0..count {
            let mut e = engine(count, 1400.0);
            assert!(e.select(CardId(id)));
            let _ = settle(&mut e);
            let slot = e.layout().slot_position(id as usize, count as usize);
            assert_eq!(e.scroll().position(), slot);
            assert!((e.camera().target.x - slot).abs() < 1e-3);
        }
    }
}

#[test]
fn deselect_leaves_no_card_dimmed() {
    let mut e = engine(6, 1400.0);
    assert!(e.select(CardId(4)));
    let _ = run(&mut e, 5);
    assert!(e.deselect());
    let _ = run(&mut e, 1);
    assert!(states(&e).iter().all(|s| !s.is_selection_bound()));
    let _ = settle(&mut e);
    for card in e.cards().iter() {
        assert_eq!(card.material.current.opacity, 1.0);
    }
    assert!(e.scroll().bounds().contains(e.scroll().target(), 0.0));
}

#[test]
fn deselect_restores_hover_under_the_pointer() {
    let mut e = engine(5, 1400.0);
    e.handle_input(InputEvent::PointerMoved { x: 700.0, y: 400.0 });
    assert!(e.select(CardId(3)));
    let _ = run(&mut e, 5);
    e.set_hovered(Some(CardId(1)));
    assert!(e.deselect());
    let _ = run(&mut e, 1);
    assert_eq!(e.pointer_zone(), PointerZone::Center);
    for card in e.cards().iter() {
        let expected = if card.id() == CardId(1) {
            InteractionState::Hovered
        } else {
            InteractionState::Idle
        };
        assert_eq!(card.state(), expected, "card {}", card.id());
    }
}

#[test]
fn rapid_clicks_end_on_the_last_card() {
    let mut e = engine(5, 1400.0);
    e.handle_input(InputEvent::PointerMoved { x: 700.0, y: 400.0 });
    click(&mut e, Some(CardId(1)));
    click(&mut e, Some(CardId(3)));
    click(&mut e, Some(CardId(0)));
    assert_eq!(e.selected(), Some(CardId(0)));
    assert_eq!(e.selection_generation(), 3);
    let _ = run(&mut e, 1);
    let selected: Vec<_> = states(&e)
        .into_iter()
        .filter(|s| *s == InteractionState::Selected)
        .collect();
    assert_eq!(selected.len(), 1);
}

#[test]
fn background_click_deselects() {
    let mut e = engine(5, 1400.0);
    e.handle_input(InputEvent::PointerMoved { x: 700.0, y: 400.0 });
    click(&mut e, Some(CardId(1)));
    assert_eq!(e.selected(), Some(CardId(1)));
    click(&mut e, None);
    assert_eq!(e.selected(), None);
}

#[test]
fn one_selection_change_per_gesture() {
    let mut e = engine(5, 1400.0);
    let g = Some(GestureId(42));
    e.execute(CarouselCommand::Select { id: CardId(1), gesture: g });
    e.execute(CarouselCommand::Select { id: CardId(2), gesture: g });
    assert_eq!(e.selected(), Some(CardId(1)));
    e.execute(CarouselCommand::Deselect { gesture: g });
    assert_eq!(e.selected(), Some(CardId(1)));
    assert!(e.select(CardId(2)));
}

#[test]
fn hover_shows_only_without_selection() {
    let mut e = engine(5, 1400.0);
    e.handle_input(InputEvent::PointerMoved { x: 700.0, y: 400.0 });
    e.set_hovered(Some(CardId(1)));
    let _ = run(&mut e, 1);
    assert_eq!(e.card_state(CardId(1)), Some(InteractionState::Hovered));

    assert!(e.select(CardId(3)));
    let _ = run(&mut e, 1);
    assert_eq!(e.card_state(CardId(1)), Some(InteractionState::Dimmed));
}

#[test]
fn hover_is_suppressed_in_edge_zones() {
    let mut e = engine(5, 1400.0);
    e.handle_input(InputEvent::PointerMoved { x: 5.0, y: 400.0 });
    e.set_hovered(Some(CardId(0)));
    let _ = run(&mut e, 1);
    assert_eq!(e.pointer_zone(), PointerZone::LeftEdge);
    assert_eq!(e.card_state(CardId(0)), Some(InteractionState::Idle));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut e = engine(3, 1400.0);
    assert!(!e.select(CardId(99)));
    assert!(!e.set_variant(CardId(99), 0));
    assert!(!e.toggle_flip(CardId(99)));
    e.set_hovered(Some(CardId(99)));
    assert_eq!(e.hovered(), None);
    assert_eq!(e.selection_generation(), 0);
}

#[test]
fn keyboard_confirm_selects_focused_card() {
    let mut e = engine(5, 1400.0);
    e.handle_key_press("ArrowRight");
    e.handle_key_press("Enter");
    assert_eq!(e.selected(), Some(CardId(3)));
    e.handle_key_press("Enter");
    assert_eq!(e.selected(), Some(CardId(3)));
    e.handle_key_press("Escape");
    assert_eq!(e.selected(), None);
}

// ── Per-card edits ─────────────────────────────────────────────────────

#[test]
fn flip_requires_selection_and_persists() {
    let mut e = engine(3, 1400.0);
    assert!(!e.toggle_flip(CardId(1)));
    assert!(e.select(CardId(1)));
    e.handle_key_press("KeyF");
    assert!(e.card(CardId(1)).unwrap().is_flipped());

    assert!(e.deselect());
    let _ = run(&mut e, 1);
    let card = e.card(CardId(1)).unwrap();
    assert!(card.is_flipped());
    assert_eq!(card.transform.target.rotation.y, std::f32::consts::PI);
}

#[test]
fn set_flipped_is_idempotent() {
    let mut e = engine(3, 1400.0);
    assert!(!e.set_flipped(CardId(2), true));
    assert!(e.select(CardId(2)));
    assert!(e.set_flipped(CardId(2), true));
    assert!(!e.set_flipped(CardId(2), true));
    assert!(e.card(CardId(2)).unwrap().is_flipped());

    assert!(e.toggle_flip(CardId(2)));
    assert!(!e.card(CardId(2)).unwrap().is_flipped());
    assert!(!e.set_flipped(CardId(2), false));
}

#[test]
fn variant_changes_retarget_base_color() {
    let catalog = Catalog {
        cards: vec![CardSpec::new(0, 0)
            .with_variant("red", [1.0, 0.0, 0.0])
            .with_variant("green", [0.0, 1.0, 0.0])],
    };
    let mut e = CarouselEngine::new(&catalog, Options::default(), 1400.0, 800.0);
    assert!(e.set_variant(CardId(0), 1));
    let _ = run(&mut e, 1);
    assert_eq!(e.card(CardId(0)).unwrap().material.target.base_color, Vec3::Y);

    assert!(e.set_variant(CardId(0), 5));
    assert_eq!(e.card(CardId(0)).unwrap().variant_index(), 0);
    assert!(!e.set_variant(CardId(0), 0));

    assert!(e.select(CardId(0)));
    e.handle_key_press("KeyV");
    assert_eq!(e.card(CardId(0)).unwrap().variant_index(), 1);
}

// ── Card set changes ───────────────────────────────────────────────────

#[test]
fn removing_selected_card_clears_selection() {
    let mut e = engine(5, 1400.0);
    assert!(e.select(CardId(2)));
    assert!(e.remove_card(CardId(2)));
    assert_eq!(e.selected(), None);
    let _ = run(&mut e, 1);
    assert!(states(&e).iter().all(|s| *s == InteractionState::Idle));
    assert!(!e.remove_card(CardId(2)));
}

#[test]
fn adding_a_card_keeps_selection_centered() {
    let mut e = engine(5, 1400.0);
    assert!(e.select(CardId(3)));
    assert!(e.add_card(CardSpec::new(10, 0)));
    assert!(!e.add_card(CardSpec::new(10, 0)));
    let rank = e.cards().rank(CardId(3)).unwrap();
    assert_eq!(rank, 4);
    assert_eq!(e.scroll().target(), e.layout().slot_position(rank, 6));
    assert_eq!(e.node(CardId(10)), Some(NodeHandle(10)));

    // the new card appears in place, dimmed like its neighbours
    let _ = run(&mut e, 1);
    assert_eq!(e.card_state(CardId(10)), Some(InteractionState::Dimmed));
}

#[test]
fn sink_receives_bound_cards_and_camera() {
    let mut e = engine(4, 1400.0);
    assert!(e.bind_node(CardId(0), NodeHandle(100)));
    assert!(!e.bind_node(CardId(9), NodeHandle(101)));
    assert_eq!(e.unbind_node(CardId(3)), Some(NodeHandle(3)));
    let sink = run(&mut e, 1);
    assert_eq!(sink.card_writes, 3);
    assert_eq!(sink.cards[&CardId(0)].0, NodeHandle(100));
    assert!(!sink.cards.contains_key(&CardId(3)));
    assert!(sink.camera.is_some());
}

// ── View mode and degenerate input ─────────────────────────────────────

#[test]
fn first_input_ends_intro() {
    let mut e = engine(5, 1400.0);
    assert_eq!(e.view_mode(), ViewMode::Intro);
    let _ = run(&mut e, 2);
    assert_eq!(e.view_mode(), ViewMode::Intro);
    e.handle_input(wheel(100.0));
    assert_eq!(e.view_mode(), ViewMode::Browse);
}

#[test]
fn edge_hover_scrolls_only_without_selection() {
    let mut e = engine(10, 1400.0);
    let start = e.scroll().target();
    e.handle_input(InputEvent::PointerMoved { x: 1390.0, y: 400.0 });
    let _ = run(&mut e, 30);
    assert!(e.scroll().target() > start);

    assert!(e.select(CardId(0)));
    let _ = run(&mut e, 30);
    assert_eq!(e.scroll().target(), e.layout().slot_position(0, 10));
}

#[test]
fn touch_drag_scrolls_and_snaps() {
    let mut e = engine(8, 600.0);
    let start = e.scroll().target();
    e.handle_input(InputEvent::TouchStart { x: 300.0, y: 400.0 });
    e.handle_input(InputEvent::TouchMove { x: 100.0, y: 400.0 });
    assert_eq!(e.scroll().phase(), ScrollPhase::Dragging);
    assert!(e.scroll().target() > start);
    e.handle_input(InputEvent::TouchEnd { x: 100.0, y: 400.0 });
    assert_eq!(e.selected(), None);
    let _ = settle(&mut e);
    let rank = e.layout().nearest_rank(e.scroll().position(), 8).unwrap();
    assert_eq!(e.scroll().position(), e.layout().slot_position(rank, 8));
}

#[test]
fn empty_carousel_and_bad_dt_stay_finite() {
    let mut e = engine(0, 0.0);
    let mut sink = FrameRecorder::new();
    e.handle_input(wheel(f32::INFINITY));
    e.handle_key_press("ArrowRight");
    e.handle_key_press("Enter");
    e.tick(f32::NAN, &mut sink);
    e.tick(-1.0, &mut sink);
    e.tick(DT, &mut sink);
    assert_eq!(e.scroll().target(), 0.0);
    assert!(e.camera().eye.is_finite());
    assert_eq!(sink.card_writes, 0);
}

#[test]
fn options_apply_at_runtime() {
    let mut e = engine(10, 1400.0);
    let mut options = Options::default();
    options.carousel.slot_width = 2.0;
    e.set_options(options);
    assert_eq!(e.layout().slot_width, 2.0);
    let _ = run(&mut e, 1);
    let card = e.card(CardId(9)).unwrap();
    assert_eq!(card.transform.target.position.x, e.layout().slot_position(9, 10));
}

// ── Randomized event sequences ─────────────────────────────────────────

fn random_event(rng: &mut StdRng) -> InputEvent {
    let x = rng.random_range(-50.0..1450.0);
    let y = rng.random_range(0.0..800.0);
    match rng.random_range(0..9) {
        0 | 1 => InputEvent::PointerMoved { x, y },
        2 => InputEvent::PointerButton {
            button: MouseButton::Left,
            pressed: rng.random_bool(0.5),
        },
        3 => wheel(rng.random_range(-3000.0..3000.0)),
        4 => InputEvent::TouchStart { x, y },
        5 => InputEvent::TouchMove { x, y },
        6 => InputEvent::TouchEnd { x, y },
        7 => InputEvent::TouchCancel,
        _ => InputEvent::PointerLeft,
    }
}

fn random_step(e: &mut CarouselEngine, rng: &mut StdRng, count: u32) {
    let id = CardId(rng.random_range(0..count + 2));
    match rng.random_range(0..12) {
        0 => {
            let _ = e.select(id);
        }
        1 => {
            let _ = e.deselect();
        }
        2 => {
            let key = ["ArrowLeft", "ArrowRight", "Enter", "Escape", "KeyF", "KeyV"]
                [rng.random_range(0..6)];
            e.handle_key_press(key);
        }
        3 => e.resize(rng.random_range(0.0..2000.0), rng.random_range(0.0..1200.0)),
        4 => {
            let hovered = rng.random_bool(0.7).then_some(id);
            e.set_hovered(hovered);
        }
        _ => {
            let event = random_event(rng);
            e.handle_input(event);
        }
    }
}

fn check_invariants(e: &CarouselEngine) {
    let selected = e
        .cards()
        .iter()
        .filter(|c| c.state() == InteractionState::Selected)
        .count();
    assert!(selected <= 1, "{selected} cards selected");

    let scroll = e.scroll();
    if scroll.phase() != ScrollPhase::Dragging {
        assert!(
            scroll.bounds().contains(scroll.target(), 1e-4),
            "target {} outside {:?}",
            scroll.target(),
            scroll.bounds()
        );
    }
    assert!(scroll.position().is_finite());
    for card in e.cards().iter() {
        let t = card.transform.current;
        assert!(t.position.is_finite() && t.rotation.is_finite());
        assert!(card.variant_index() < card.variants().len());
    }
}

#[test]
fn random_event_sequences_hold_invariants() {
    for seed in 0..8_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = rng.random_range(0..12);
        let mut e = engine(count, 1400.0);
        let mut sink = FrameRecorder::new();
        for _ in 0..600 {
            for _ in 0..rng.random_range(0..4) {
                random_step(&mut e, &mut rng, count);
            }
            let dt = if rng.random_bool(0.05) {
                rng.random_range(0.0..0.5)
            } else {
                DT
            };
            e.tick(dt, &mut sink);
            check_invariants(&e);
        }
    }
}

#[test]
fn random_sequences_then_deselect_settle_clean() {
    for seed in 100..104_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut e = engine(7, 1400.0);
        for _ in 0..300 {
            random_step(&mut e, &mut rng, 7);
            let _ = run(&mut e, 1);
        }
        // release any touch still in progress
        e.handle_input(InputEvent::TouchCancel);
        e.handle_input(InputEvent::PointerLeft);
        let _ = e.deselect();
        let _ = settle(&mut e);
        assert!(states(&e).iter().all(|s| !s.is_selection_bound()));
        assert_eq!(e.scroll().phase(), ScrollPhase::Idle);
        assert!(e.scroll().bounds().contains(e.scroll().position(), 0.0));
    }
}
