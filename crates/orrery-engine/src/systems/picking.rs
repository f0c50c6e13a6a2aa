//! Ray casting against scene nodes.
//!
//! Spheres and shells hit as spheres scaled by their largest axis. Text and
//! halo shapes hit as quads in the node's own XY plane (they are kept facing
//! the camera), centred on the node position.

use glam::{Quat, Vec2, Vec3};
use crate::api::types::NodeId;
use crate::components::node::Node;
use crate::components::visual::Shape;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length (or zero for a degenerate ray, which hits nothing).
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest non-negative hit distance against a sphere.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if radius <= 0.0 || self.direction == Vec3::ZERO {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        let far = -b + root;
        if far < 0.0 {
            None
        } else if near >= 0.0 {
            Some(near)
        } else {
            Some(far)
        }
    }

    /// Hit distance against a rectangle with the given half extents, lying in
    /// the XY plane of `rotation`, centred at `center`.
    pub fn intersect_quad(&self, center: Vec3, rotation: Quat, half: Vec2) -> Option<f32> {
        if half.x <= 0.0 || half.y <= 0.0 {
            return None;
        }
        let normal = rotation * Vec3::Z;
        let denom = normal.dot(self.direction);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = normal.dot(center - self.origin) / denom;
        if t < 0.0 {
            return None;
        }
        let local = rotation.inverse() * (self.at(t) - center);
        (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    pub phrase: Option<usize>,
}

/// Hit distance for a single node, if it is active, visible and hit.
pub fn intersect_node(ray: &Ray, node: &Node) -> Option<f32> {
    if !node.active {
        return None;
    }
    let visual = node.visual.as_ref()?;
    match visual.shape {
        Shape::Sphere { radius } | Shape::Shell { radius } => {
            ray.intersect_sphere(node.position, radius * node.scale.max_element())
        }
        Shape::Text { size, width, .. } => {
            let half = Vec2::new(width * 0.5 * node.scale.x, size * 0.5 * node.scale.y);
            ray.intersect_quad(node.position, node.rotation, half)
        }
        Shape::Halo { size } => {
            let half = Vec2::new(size * 0.5 * node.scale.x, size * 0.5 * node.scale.y);
            ray.intersect_quad(node.position, node.rotation, half)
        }
        // Thin streaks are decoration only.
        Shape::Streak { .. } => None,
    }
}

/// All hits along the ray, nearest first.
pub fn raycast<'a>(ray: &Ray, nodes: impl Iterator<Item = &'a Node>) -> Vec<Hit> {
    let mut hits: Vec<Hit> = nodes
        .filter_map(|node| {
            intersect_node(ray, node).map(|distance| Hit {
                node: node.id,
                distance,
                phrase: node.phrase,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Phrase index of the nearest hit that carries one.
/// Nearer hits without phrase data (the sun) do not block the pick.
pub fn pick_phrase<'a>(ray: &Ray, nodes: impl Iterator<Item = &'a Node>) -> Option<usize> {
    raycast(ray, nodes).into_iter().find_map(|hit| hit.phrase)
}
