//! Falling meteor streaks.

use std::f32::consts::FRAC_PI_4;
use glam::{Quat, Vec3};
use crate::api::types::NodeId;
use crate::error::SceneError;
use crate::systems::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorConfig {
    pub count: usize,
    /// Horizontal spread (x and z) of spawn points, centred on the origin.
    pub spread: f32,
    /// Spawn heights are drawn from `[ceiling, ceiling + ceiling_span)`.
    pub ceiling: f32,
    pub ceiling_span: f32,
    /// A meteor respawns once it falls below this height.
    pub floor: f32,
    /// Horizontal drift per frame is drawn from `[-drift/2, drift/2)`.
    pub drift: f32,
    /// Fall speed per frame is drawn from `[fall_min, fall_min + fall_span)`.
    pub fall_min: f32,
    pub fall_span: f32,
    /// Fixed roll about Z.
    pub roll: f32,
    pub length: f32,
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub opacity: f32,
}

impl Default for MeteorConfig {
    fn default() -> Self {
        Self {
            count: 15,
            spread: 400.0,
            ceiling: 100.0,
            ceiling_span: 200.0,
            floor: -100.0,
            drift: 2.0,
            fall_min: 2.0,
            fall_span: 3.0,
            roll: FRAC_PI_4,
            length: 8.0,
            radius_top: 0.1,
            radius_bottom: 0.3,
            opacity: 0.8,
        }
    }
}

impl MeteorConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.fall_min <= 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "meteors must fall (fall_min = {})",
                self.fall_min
            )));
        }
        if self.floor >= self.ceiling {
            return Err(SceneError::InvalidConfig(format!(
                "meteor floor {} must be below ceiling {}",
                self.floor, self.ceiling
            )));
        }
        Ok(())
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.roll)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    pub node: NodeId,
    pub position: Vec3,
    /// Displacement per frame.
    pub velocity: Vec3,
    /// Height a reset meteor reappears at. Fixed per meteor.
    pub reset_y: f32,
}

impl Meteor {
    pub fn spawn(node: NodeId, config: &MeteorConfig, rng: &mut Rng) -> Self {
        let position = Vec3::new(
            rng.centered(config.spread),
            rng.next_f32() * config.ceiling_span + config.ceiling,
            rng.centered(config.spread),
        );
        let velocity = Vec3::new(
            rng.centered(config.drift),
            -(rng.next_f32() * config.fall_span + config.fall_min),
            rng.centered(config.drift),
        );
        let reset_y = rng.next_f32() * config.ceiling_span + config.ceiling;
        Self {
            node,
            position,
            velocity,
            reset_y,
        }
    }

    /// One frame of motion. Returns true if the meteor wrapped back up.
    pub fn step(&mut self, config: &MeteorConfig, rng: &mut Rng) -> bool {
        self.position += self.velocity;
        if self.position.y < config.floor {
            self.position = Vec3::new(
                rng.centered(config.spread),
                self.reset_y,
                rng.centered(config.spread),
            );
            return true;
        }
        false
    }
}
