/// Scene light rig.
///
/// Lights are static for the lifetime of a scene: the stage sets them up at
/// init and the host reads them once to configure its shading pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::components::visual::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Omnidirectional light with linear falloff to zero at `range`.
    Point { position: Vec3, range: f32 },
    /// Parallel light shining from `direction` toward the origin.
    Directional { direction: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
}

impl Light {
    pub fn point(position: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self {
            kind: LightKind::Point { position, range },
            color,
            intensity,
        }
    }

    pub fn directional(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional { direction },
            color,
            intensity,
        }
    }

    pub fn to_instance(&self) -> LightInstance {
        let (kind, vector, range) = match self.kind {
            LightKind::Point { position, range } => (0.0, position, range),
            LightKind::Directional { direction } => (1.0, direction.normalize_or_zero(), 0.0),
        };
        LightInstance {
            kind,
            vector: vector.to_array(),
            color: self.color.to_array(),
            intensity: self.intensity,
            range,
            _pad: [0.0; 3],
        }
    }
}

/// Wire format (12 floats / 48 bytes):
/// `[kind, x, y, z, r, g, b, intensity, range, pad×3]`
/// `kind` 0 = point (xyz = position), 1 = directional (xyz = unit direction).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LightInstance {
    pub kind: f32,
    pub vector: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    pub _pad: [f32; 3],
}

impl LightInstance {
    pub const FLOATS: usize = 12;
}

/// Ambient term plus a short list of lights.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub ambient: Color,
    pub ambient_intensity: f32,
    pub lights: Vec<Light>,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: Color::WHITE,
            ambient_intensity: 1.0,
            lights: Vec::new(),
        }
    }
}

impl LightRig {
    pub fn new(ambient: Color, ambient_intensity: f32) -> Self {
        Self {
            ambient,
            ambient_intensity,
            lights: Vec::new(),
        }
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Flatten to wire instances, truncated to `max`.
    pub fn instances(&self, max: usize) -> Vec<LightInstance> {
        if self.lights.len() > max {
            log::warn!("light rig has {} lights, only {} fit", self.lights.len(), max);
        }
        self.lights.iter().take(max).map(Light::to_instance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<LightInstance>(), LightInstance::FLOATS * 4);
    }

    #[test]
    fn directional_is_normalized() {
        let l = Light::directional(Vec3::new(-1.0, 1.0, 1.0), Color::hex(0x7b61ff), 0.5).to_instance();
        assert_eq!(l.kind, 1.0);
        let len = Vec3::from(l.vector).length();
        assert!((len - 1.0).abs() < 1e-5);
    }

    #[test]
    fn instances_respect_capacity() {
        let rig = LightRig::new(Color::WHITE, 0.4)
            .with_light(Light::point(Vec3::ZERO, Color::WHITE, 2.0, 300.0))
            .with_light(Light::directional(Vec3::Y, Color::WHITE, 1.0));
        assert_eq!(rig.instances(1).len(), 1);
        assert_eq!(rig.instances(8).len(), 2);
        assert_eq!(rig.instances(8)[0].range, 300.0);
    }
}
