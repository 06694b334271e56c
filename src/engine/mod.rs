//! The carousel session: state, event entry points and the frame tick.

/// The engine's interactive vocabulary.
pub mod command;
mod frame;
mod input;
mod selection;

use glam::Vec2;

pub use self::command::CarouselCommand;
use crate::camera::{Camera, CameraRig, ViewMode};
use crate::card::{CardEntity, CardId, CardSet};
use crate::carousel::{Layout, ScrollController};
use crate::catalog::Catalog;
use crate::input::{InputProcessor, PointerZone};
use crate::interaction::{effective_selection, InteractionState, Selection};
use crate::options::Options;
use crate::scene::{NodeHandle, SceneBindings};

/// One carousel session.
///
/// Owns the card set, the selection, the scroll controller, the camera rig
/// and the input processor.
///
/// # Frame loop
///
/// Forward events with [`handle_input`](Self::handle_input) and
/// [`handle_key_press`](Self::handle_key_press) (or build
/// [`CarouselCommand`]s directly and [`execute`](Self::execute) them), tell
/// the engine what the host's picking sees with
/// [`set_hovered`](Self::set_hovered), and call [`tick`](Self::tick) once
/// per rendered frame. Call [`resize`](Self::resize) when the viewport
/// changes.
///
/// # Scene output
///
/// Every card starts bound to `NodeHandle(id)`; rebind with
/// [`bind_node`](Self::bind_node). Unbound cards are animated but not
/// written.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    options: Options,
    cards: CardSet,
    selection: Selection,
    scroll: ScrollController,
    camera: CameraRig,
    input: InputProcessor,
    bindings: SceneBindings,
    hovered: Option<CardId>,
    pointer: Vec2,
    zone: PointerZone,
    animating: bool,
    frame: u64,
}

impl CarouselEngine {
    /// Start a session for `catalog` in a `width` × `height` viewport.
    ///
    /// Cards are placed on their idle slots immediately; the camera starts
    /// on the intro shot.
    #[must_use]
    pub fn new(catalog: &Catalog, options: Options, width: f32, height: f32) -> Self {
        let cards = CardSet::from_catalog(catalog);
        let layout = Layout::for_viewport(width, height, &options.carousel);
        let scroll =
            ScrollController::new(options.carousel.clone(), layout, cards.len());
        let camera =
            CameraRig::new(&options.camera, layout.profile, layout.aspect());
        let input = InputProcessor::new(
            options.input.clone(),
            options.keybindings.clone(),
            width,
            height,
        );

        let mut bindings = SceneBindings::new();
        for id in cards.ids() {
            let _ = bindings.bind(id, NodeHandle(id.0));
        }

        log::info!(
            "carousel started: {} cards, {:?} layout, {} visible",
            cards.len(),
            layout.profile,
            layout.visible_cards
        );

        let mut engine = Self {
            options,
            cards,
            selection: Selection::new(),
            scroll,
            camera,
            input,
            bindings,
            hovered: None,
            pointer: Vec2::ZERO,
            zone: PointerZone::Center,
            animating: false,
            frame: 0,
        };
        engine.place_all();
        engine
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// All cards in display order.
    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// One card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardEntity> {
        self.cards.get(id)
    }

    /// State a card resolved to on the last tick.
    #[must_use]
    pub fn card_state(&self, id: CardId) -> Option<InteractionState> {
        self.cards.get(id).map(CardEntity::state)
    }

    /// The selected card, if it still exists.
    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        effective_selection(self.selection.active(), |id| {
            self.cards.contains(id)
        })
    }

    /// Bumped on every accepted selection change.
    #[must_use]
    pub fn selection_generation(&self) -> u64 {
        self.selection.generation()
    }

    /// The scroll controller.
    #[must_use]
    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        self.scroll.layout()
    }

    /// The camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera.camera()
    }

    /// Current view mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.camera.mode()
    }

    /// Card currently under the pointer, as last reported by the host.
    #[must_use]
    pub fn hovered(&self) -> Option<CardId> {
        self.hovered
    }

    /// Zone of the last pointer position.
    #[must_use]
    pub fn pointer_zone(&self) -> PointerZone {
        self.zone
    }

    /// Pointer in normalized device coordinates.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether anything moved on the last tick.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Number of ticks so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// The input processor (key bindings, zones).
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    // ── Host integration ───────────────────────────────────────────

    /// Report the card under the pointer (or touch point) from the host's
    /// picking. Unknown ids are treated as no card.
    pub fn set_hovered(&mut self, card: Option<CardId>) {
        self.hovered = card.filter(|&id| self.cards.contains(id));
    }

    /// Bind a card to a scene node. Returns `false` for unknown cards.
    pub fn bind_node(&mut self, card: CardId, node: NodeHandle) -> bool {
        if !self.cards.contains(card) {
            log::warn!("bind_node: unknown card {card}");
            return false;
        }
        let _ = self.bindings.bind(card, node);
        true
    }

    /// Stop writing a card to the scene.
    pub fn unbind_node(&mut self, card: CardId) -> Option<NodeHandle> {
        self.bindings.unbind(card)
    }

    /// Node a card is written to.
    #[must_use]
    pub fn node(&self, card: CardId) -> Option<NodeHandle> {
        self.bindings.node(card)
    }

    /// Handle a viewport resize: layout profile, scroll bounds, edge zones
    /// and camera aspect are recomputed. Nothing teleports.
    pub fn resize(&mut self, width: f32, height: f32) {
        let layout =
            Layout::for_viewport(width, height, &self.options.carousel);
        if layout.profile != self.layout().profile {
            log::debug!("layout profile -> {:?}", layout.profile);
        }
        self.scroll.set_layout(layout);
        self.input.resize(width, height);
        self.camera.set_aspect(layout.aspect());
    }

    /// Replace the options at runtime.
    pub fn set_options(&mut self, options: Options) {
        let (width, height) = (self.layout().width, self.layout().height);
        let layout = Layout::for_viewport(width, height, &options.carousel);
        self.scroll.set_options(options.carousel.clone());
        self.scroll.set_layout(layout);
        self.input
            .set_options(options.input.clone(), options.keybindings.clone());
        self.camera.apply_options(&options.camera);
        self.options = options;
    }
}

#[cfg(test)]
mod tests;
