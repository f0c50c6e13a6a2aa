//! Damped orbit controls around a fixed target.
//!
//! Drag rotates, wheel dollies, optional auto-rotation spins the camera
//! around the vertical axis. Rotation deltas decay by the damping factor
//! every update so motion eases out after the pointer is released.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use crate::input::queue::InputEvent;
use crate::renderer::camera::PerspectiveCamera;

const POLAR_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsConfig {
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// One full turn every `60 / speed` seconds at 60 fps.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    /// Per wheel notch dolly factor.
    pub zoom_scale: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            damping: 0.05,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            rotate_speed: 1.0,
            zoom_scale: 0.95,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub config: ControlsConfig,
    pub target: Vec3,
    /// Pending azimuth (theta) and polar (phi) rotation.
    delta: Vec2,
    scale: f32,
    drag_from: Option<Vec2>,
    viewport: Vec2,
}

impl OrbitControls {
    pub fn new(config: ControlsConfig, viewport: Vec2) -> Self {
        Self {
            config,
            target: Vec3::ZERO,
            delta: Vec2::ZERO,
            scale: 1.0,
            drag_from: None,
            viewport,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.drag_from = Some(Vec2::new(x, y));
            }
            InputEvent::PointerUp { .. } => {
                self.drag_from = None;
            }
            InputEvent::PointerMove { x, y } => {
                if let Some(from) = self.drag_from {
                    let to = Vec2::new(x, y);
                    let moved = to - from;
                    let height = self.viewport.y.max(1.0);
                    self.rotate_left(TAU * moved.x / height * self.config.rotate_speed);
                    self.rotate_up(TAU * moved.y / height * self.config.rotate_speed);
                    self.drag_from = Some(to);
                }
            }
            InputEvent::Wheel { delta } => {
                if delta < 0.0 {
                    self.scale *= self.config.zoom_scale;
                } else if delta > 0.0 {
                    self.scale /= self.config.zoom_scale;
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Vec2::new(width, height);
            }
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.x -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.y -= angle;
    }

    fn auto_rotation_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.config.auto_rotate_speed
    }

    /// Apply pending motion to the camera. Call once per frame.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        if self.config.auto_rotate && !self.is_dragging() {
            self.rotate_left(self.auto_rotation_angle());
        }

        let offset = camera.position - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI * 0.5)
        };

        let damping = self.config.damping;
        theta += self.delta.x * damping;
        phi += self.delta.y * damping;
        phi = phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        radius = (radius * self.scale).clamp(self.config.min_distance, self.config.max_distance);

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.position = self.target + offset;
        camera.look_at(self.target);

        self.delta *= 1.0 - damping;
        self.scale = 1.0;
    }
}
