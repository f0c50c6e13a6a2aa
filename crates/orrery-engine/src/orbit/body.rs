//! Orbiting phrase bodies.
//!
//! A body's orbit shape is fixed at creation. Only the orbital angle and the
//! entrance progress change afterwards.

use std::f32::consts::TAU;
use glam::Vec3;
use crate::api::types::NodeId;
use crate::orbit::entrance::Entrance;

/// Angle advance per frame, as a fraction of `speed`.
/// Motion is tied to frame rate, not elapsed time.
pub const ANGLE_STEP: f32 = 0.01;

/// Peak vertical drift of a fanned orbit.
pub const WOBBLE_AMPLITUDE: f32 = 0.8;

/// How the flat orbit circle is placed in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitPlane {
    /// Height is `vertical_offset + z·sin(inclination)`, computed from the
    /// un-rotated `z`; x and z stay on the flat circle.
    Offset,
    /// Circle tilted about X by `inclination`, turned about Y by `azimuth`,
    /// with a sinusoidal vertical wobble.
    Fanned,
}

/// Immutable orbit parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitShape {
    pub plane: OrbitPlane,
    pub radius: f32,
    /// Signed; the sign is the direction of travel.
    pub speed: f32,
    pub inclination: f32,
    pub azimuth: f32,
    pub vertical_offset: f32,
    pub wobble_speed: f32,
    pub wobble_phase: f32,
}

impl OrbitShape {
    /// Position at orbital `angle` and elapsed time `t` (seconds).
    pub fn position(&self, angle: f32, t: f32) -> Vec3 {
        let x = self.radius * angle.cos();
        let z = self.radius * angle.sin();
        match self.plane {
            OrbitPlane::Offset => {
                let y = self.vertical_offset + z * self.inclination.sin();
                Vec3::new(x, y, z)
            }
            OrbitPlane::Fanned => {
                let (sin_i, cos_i) = self.inclination.sin_cos();
                let y = -z * sin_i;
                let z = z * cos_i;

                let (sin_a, cos_a) = self.azimuth.sin_cos();
                let x2 = x * cos_a - z * sin_a;
                let z2 = x * sin_a + z * cos_a;

                let wobble = (t * self.wobble_speed + self.wobble_phase).sin() * WOBBLE_AMPLITUDE;
                Vec3::new(x2, y + wobble, z2)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrbitingBody {
    /// Scene node showing the phrase label.
    pub node: NodeId,
    /// Index into the stage's phrase list.
    pub phrase: usize,
    shape: OrbitShape,
    angle: f32,
    entrance: Option<Entrance>,
}

impl OrbitingBody {
    pub fn new(node: NodeId, phrase: usize, shape: OrbitShape, angle: f32) -> Self {
        Self {
            node,
            phrase,
            shape,
            angle: angle.rem_euclid(TAU),
            entrance: None,
        }
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = Some(entrance);
        self
    }

    pub fn shape(&self) -> &OrbitShape {
        &self.shape
    }

    /// Current orbital angle in [0, 2π).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn entrance(&self) -> Option<&Entrance> {
        self.entrance.as_ref()
    }

    /// One frame of orbital motion.
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.shape.speed * ANGLE_STEP).rem_euclid(TAU);
    }

    pub fn position(&self, t: f32) -> Vec3 {
        self.shape.position(self.angle, t)
    }

    /// Advance the entrance animation to `now` and return the render scale.
    /// Bodies without an entrance are always at full size.
    pub fn entrance_scale(&mut self, now: f64) -> f32 {
        match self.entrance.as_mut() {
            Some(entrance) => {
                entrance.update(now);
                entrance.scale()
            }
            None => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn offset_shape() -> OrbitShape {
        OrbitShape {
            plane: OrbitPlane::Offset,
            radius: 20.0,
            speed: 0.25,
            inclination: 0.3,
            azimuth: 0.0,
            vertical_offset: 2.0,
            wobble_speed: 0.0,
            wobble_phase: 0.0,
        }
    }

    fn fanned_shape() -> OrbitShape {
        OrbitShape {
            plane: OrbitPlane::Fanned,
            radius: 31.0,
            speed: -0.05,
            inclination: 0.4,
            azimuth: 1.2,
            vertical_offset: 0.0,
            wobble_speed: 1.1,
            wobble_phase: 3.0,
        }
    }

    #[test]
    fn angle_after_n_frames() {
        let mut body = OrbitingBody::new(NodeId(1), 0, offset_shape(), 1.0);
        for _ in 0..1000 {
            body.advance();
        }
        let expected = (1.0 + 1000.0 * 0.25 * ANGLE_STEP).rem_euclid(TAU);
        assert_abs_diff_eq!(body.angle(), expected, epsilon = 1e-3);
    }

    #[test]
    fn negative_speed_wraps_into_range() {
        let mut body = OrbitingBody::new(NodeId(1), 0, fanned_shape(), 0.0);
        body.advance();
        assert!(body.angle() >= 0.0 && body.angle() < TAU);
        assert_abs_diff_eq!(body.angle(), TAU - 0.0005, epsilon = 1e-5);
    }

    #[test]
    fn offset_plane_uses_unrotated_z() {
        let shape = offset_shape();
        let angle = 0.7;
        let p = shape.position(angle, 0.0);
        let z = 20.0 * angle.sin();
        assert_abs_diff_eq!(p.x, 20.0 * angle.cos(), epsilon = 1e-5);
        assert_abs_diff_eq!(p.z, z, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 2.0 + z * 0.3f32.sin(), epsilon = 1e-5);
    }

    #[test]
    fn fanned_plane_keeps_radius_up_to_wobble() {
        let shape = fanned_shape();
        for step in 0..32 {
            let angle = step as f32 * 0.2;
            let t = step as f32 * 0.37;
            let p = shape.position(angle, t);
            let wobble = (t * shape.wobble_speed + shape.wobble_phase).sin() * WOBBLE_AMPLITUDE;
            let on_plane = Vec3::new(p.x, p.y - wobble, p.z);
            assert_abs_diff_eq!(on_plane.length(), shape.radius, epsilon = 1e-3);
        }
    }

    #[test]
    fn fanned_plane_without_tilt_is_flat_circle() {
        let shape = OrbitShape {
            inclination: 0.0,
            azimuth: 0.0,
            wobble_speed: 0.0,
            wobble_phase: 0.0,
            ..fanned_shape()
        };
        let p = shape.position(std::f32::consts::FRAC_PI_2, 5.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.z, 31.0, epsilon = 1e-4);
    }

    #[test]
    fn body_without_entrance_is_full_size() {
        let mut body = OrbitingBody::new(NodeId(1), 0, offset_shape(), 0.0);
        assert_eq!(body.entrance_scale(0.0), 1.0);
    }
}
