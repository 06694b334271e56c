//! Binding between cards and the host's retained scene graph.
//!
//! The engine never reads the scene back: each tick it writes every bound
//! card's current transform and material, then the camera, into a
//! [`SceneSink`]. Which scene node a card drives is looked up through
//! [`SceneBindings`].

use rustc_hash::FxHashMap;

use crate::camera::Camera;
use crate::card::{CardId, Material, Transform};

/// Opaque handle to a node in the host's scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub u32);

/// Receives the per-frame output of the engine.
pub trait SceneSink {
    /// Write one card's current transform and material to its node.
    fn write_card(
        &mut self,
        node: NodeHandle,
        card: CardId,
        transform: &Transform,
        material: &Material,
    );

    /// Write the camera.
    fn write_camera(&mut self, camera: &Camera);
}

/// Card → scene node mapping.
#[derive(Debug, Clone, Default)]
pub struct SceneBindings {
    nodes: FxHashMap<CardId, NodeHandle>,
}

impl SceneBindings {
    /// Empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `card` to `node`, returning the node it was previously bound to.
    pub fn bind(&mut self, card: CardId, node: NodeHandle) -> Option<NodeHandle> {
        self.nodes.insert(card, node)
    }

    /// Remove the binding for `card`.
    pub fn unbind(&mut self, card: CardId) -> Option<NodeHandle> {
        self.nodes.remove(&card)
    }

    /// Node bound to `card`.
    #[must_use]
    pub fn node(&self, card: CardId) -> Option<NodeHandle> {
        self.nodes.get(&card).copied()
    }

    /// Number of bound cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A [`SceneSink`] that keeps the latest frame in memory.
///
/// Used by the replay binary, benchmarks and tests; also handy for hosts
/// that prefer to pull state rather than have it pushed.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    /// Latest write per card.
    pub cards: FxHashMap<CardId, (NodeHandle, Transform, Material)>,
    /// Latest camera.
    pub camera: Option<Camera>,
    /// Total card writes received.
    pub card_writes: u64,
}

impl FrameRecorder {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest transform written for `card`.
    #[must_use]
    pub fn transform(&self, card: CardId) -> Option<&Transform> {
        self.cards.get(&card).map(|(_, t, _)| t)
    }

    /// Latest material written for `card`.
    #[must_use]
    pub fn material(&self, card: CardId) -> Option<&Material> {
        self.cards.get(&card).map(|(_, _, m)| m)
    }
}

impl SceneSink for FrameRecorder {
    fn write_card(
        &mut self,
        node: NodeHandle,
        card: CardId,
        transform: &Transform,
        material: &Material,
    ) {
        let _ = self.cards.insert(card, (node, *transform, *material));
        self.card_writes += 1;
    }

    fn write_camera(&mut self, camera: &Camera) {
        self.camera = Some(*camera);
    }
}
