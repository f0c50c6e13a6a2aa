//! The central sun: core sphere, glow shell, optional halo sprite and label.

use glam::{Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::visual::{Color, Material};
use crate::core::scene::Scene;
use crate::systems::billboard::facing_rotation;

#[derive(Debug, Clone, PartialEq)]
pub struct HaloConfig {
    pub size: f32,
    pub opacity: f32,
    /// Sprite scale is `size + sin(t·pulse_rate)·pulse_amount`.
    pub pulse_rate: f32,
    pub pulse_amount: f32,
    /// Opacity is `opacity_base + sin(t·opacity_rate)·opacity_amount`.
    pub opacity_base: f32,
    pub opacity_rate: f32,
    pub opacity_amount: f32,
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            opacity: 0.6,
            pulse_rate: 2.0,
            pulse_amount: 2.0,
            opacity_base: 0.5,
            opacity_rate: 1.5,
            opacity_amount: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunLabelConfig {
    pub text: String,
    pub size: f32,
    pub depth: f32,
    pub height: f32,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunConfig {
    pub radius: f32,
    pub material: Material,
    pub glow_radius: f32,
    pub glow: Material,
    /// Glow scale relative to the core pulse.
    pub glow_ratio: f32,
    /// Glow yaw per frame (radians).
    pub glow_spin: f32,
    /// Core scale is `1 + sin(t·pulse_rate)·pulse_amount`.
    pub pulse_rate: f32,
    pub pulse_amount: f32,
    pub halo: Option<HaloConfig>,
    pub label: SunLabelConfig,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            material: Material::new(Color::hex(0xffaa00)).with_emissive(Color::hex(0xff4400), 2.0),
            glow_radius: 7.0,
            glow: Material::unlit(Color::hex(0xff4400)).with_opacity(0.3),
            glow_ratio: 1.0,
            glow_spin: 0.0,
            pulse_rate: 2.0,
            pulse_amount: 0.05,
            halo: None,
            label: SunLabelConfig {
                text: "Monserrat".to_string(),
                size: 1.5,
                depth: 0.2,
                height: 8.0,
                material: Material::unlit(Color::WHITE),
            },
        }
    }
}

/// Per-frame sun state derived from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPulse {
    pub core_scale: f32,
    pub glow_scale: f32,
    pub halo_scale: f32,
    pub halo_opacity: f32,
}

impl SunConfig {
    pub fn pulse(&self, t: f32) -> SunPulse {
        let core_scale = 1.0 + (t * self.pulse_rate).sin() * self.pulse_amount;
        let (halo_scale, halo_opacity) = match &self.halo {
            Some(h) => (
                h.size + (t * h.pulse_rate).sin() * h.pulse_amount,
                h.opacity_base + (t * h.opacity_rate).sin() * h.opacity_amount,
            ),
            None => (0.0, 0.0),
        };
        SunPulse {
            core_scale,
            glow_scale: core_scale * self.glow_ratio,
            halo_scale,
            halo_opacity,
        }
    }
}

/// Scene nodes making up the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunNodes {
    pub core: NodeId,
    pub glow: NodeId,
    pub halo: Option<NodeId>,
}

impl SunNodes {
    /// Apply this frame's pulse to the sun's nodes and turn the halo sprite
    /// toward `eye`.
    pub fn animate(&self, config: &SunConfig, scene: &mut Scene, t: f32, eye: Vec3) {
        let pulse = config.pulse(t);
        if let Some(core) = scene.get_mut(self.core) {
            core.set_uniform_scale(pulse.core_scale);
        }
        if let Some(glow) = scene.get_mut(self.glow) {
            glow.set_uniform_scale(pulse.glow_scale);
            if config.glow_spin != 0.0 {
                glow.rotation = (Quat::from_rotation_y(config.glow_spin) * glow.rotation).normalize();
            }
        }
        if let Some(halo_id) = self.halo {
            if let Some(halo) = scene.get_mut(halo_id) {
                halo.scale = Vec3::new(pulse.halo_scale, pulse.halo_scale, 1.0);
                halo.rotation = facing_rotation(halo.position, eye, Vec3::Y);
                if let Some(visual) = halo.visual.as_mut() {
                    visual.material.opacity = pulse.halo_opacity;
                }
            }
        }
    }
}
