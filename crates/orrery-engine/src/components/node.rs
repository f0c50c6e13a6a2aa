use glam::{Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::visual::Visual;

/// Scene node: one struct, optional components.
/// Simple over pure: a few dozen nodes, not millions.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Whether this node is active (inactive nodes are not drawn or picked).
    pub active: bool,
    /// Position in world space.
    pub position: Vec3,
    pub rotation: Quat,
    /// Per-axis scale applied on top of the visual's own size.
    pub scale: Vec3,
    /// Visual component (nodes without one are invisible).
    pub visual: Option<Visual>,
    /// Index of the phrase this node displays, if any. Picking only reports
    /// nodes that carry one.
    pub phrase: Option<usize>,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            visual: None,
            phrase: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn with_phrase(mut self, index: usize) -> Self {
        self.phrase = Some(index);
        self
    }

    /// Set a uniform scale on all three axes.
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }
}
