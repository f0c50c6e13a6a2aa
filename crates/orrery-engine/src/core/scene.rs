use crate::api::types::NodeId;
use crate::components::node::Node;

/// Simple node storage using a flat Vec.
/// Designed for small scenes (tens to hundreds of nodes).
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove a node by ID. Returns the removed node if found.
    pub fn despawn(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Find all nodes with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.tag == tag).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node (scene teardown).
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = NodeId(1);
        scene.spawn(Node::new(id).with_position(Vec3::new(1.0, 2.0, 3.0)));
        let n = scene.get(id).unwrap();
        assert_eq!(n.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn despawn_keeps_order() {
        let mut scene = Scene::new();
        for i in 1..=3 {
            scene.spawn(Node::new(NodeId(i)));
        }
        scene.despawn(NodeId(1));
        let ids: Vec<u32> = scene.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Node::new(NodeId(1)).with_tag("sun"));
        scene.spawn(Node::new(NodeId(2)).with_tag("meteor"));
        scene.spawn(Node::new(NodeId(3)).with_tag("meteor"));
        assert_eq!(scene.find_by_tag("sun").unwrap().id, NodeId(1));
        assert_eq!(scene.find_all_by_tag("meteor").len(), 2);
    }
}
