//! Variant configuration for the orbit stage.
//!
//! `OrbitVariant::default()` is the basic scene. Other scenes start from it
//! and replace whole sub-configs.

use glam::Vec3;
use crate::api::stage::StageConfig;
use crate::assets::overrides::SceneOverrides;
use crate::components::visual::{Color, Material};
use crate::error::SceneError;
use crate::orbit::meteor::MeteorConfig;
use crate::orbit::placement::PlacementConfig;
use crate::orbit::sun::SunConfig;
use crate::systems::controls::ControlsConfig;
use crate::systems::lighting::{Light, LightRig};
use crate::systems::starfield::StarFieldConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct CameraSetup {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 30.0, 60.0),
            target: Vec3::ZERO,
        }
    }
}

/// How phrase labels look.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Longer phrases are cut to this many characters plus "...".
    pub max_chars: Option<usize>,
    pub size: f32,
    pub depth: f32,
    /// Colour for phrase `i` is `palette[i % len]`.
    pub palette: Vec<Color>,
    /// Lit labels glowing in their own colour at this intensity.
    /// `None` draws flat, unlit labels.
    pub glow: Option<f32>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            max_chars: Some(15),
            size: 0.8,
            depth: 0.1,
            palette: vec![Color::hex(0x7b61ff)],
            glow: None,
        }
    }
}

impl LabelStyle {
    pub fn color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return Color::WHITE;
        }
        self.palette[index % self.palette.len()]
    }

    pub fn material(&self, index: usize) -> Material {
        let color = self.color(index);
        match self.glow {
            Some(intensity) => Material::new(color).with_emissive(color, intensity),
            None => Material::unlit(color),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitVariant {
    pub name: String,
    pub stage: StageConfig,
    pub camera: CameraSetup,
    pub controls: ControlsConfig,
    pub lights: LightRig,
    pub stars: StarFieldConfig,
    pub sun: SunConfig,
    pub placement: PlacementConfig,
    pub labels: LabelStyle,
    /// Entrance delay per phrase index, in seconds. `None` shows phrases
    /// at full size immediately.
    pub entrance_stagger: Option<f32>,
    pub meteors: Option<MeteorConfig>,
    /// Pointer presses select phrases.
    pub picking: bool,
}

impl Default for OrbitVariant {
    fn default() -> Self {
        Self {
            name: "basic".to_string(),
            stage: StageConfig {
                max_instances: 512,
                background: Color::hex(0x050510),
                fog_density: 0.002,
                ..Default::default()
            },
            camera: CameraSetup::default(),
            controls: ControlsConfig {
                damping: 0.05,
                min_distance: 20.0,
                max_distance: 200.0,
                ..Default::default()
            },
            lights: LightRig::new(Color::WHITE, 0.5)
                .with_light(Light::point(Vec3::ZERO, Color::WHITE, 2.0, 300.0)),
            stars: StarFieldConfig::default(),
            sun: SunConfig::default(),
            placement: PlacementConfig::banded(),
            labels: LabelStyle::default(),
            entrance_stagger: None,
            meteors: None,
            picking: true,
        }
    }
}

fn invalid(msg: String) -> SceneError {
    SceneError::InvalidConfig(msg)
}

impl OrbitVariant {
    /// Nodes that exist before any phrase arrives.
    pub fn fixed_node_count(&self) -> usize {
        let halo = usize::from(self.sun.halo.is_some());
        let meteors = self.meteors.as_ref().map_or(0, |m| m.count);
        // core, glow, label
        3 + halo + meteors
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let cam = &self.camera;
        if !(cam.fov_y_degrees > 0.0 && cam.fov_y_degrees < 180.0) {
            return Err(invalid(format!("field of view {} out of range", cam.fov_y_degrees)));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(invalid(format!("clip planes near={} far={}", cam.near, cam.far)));
        }
        let ctl = &self.controls;
        if ctl.min_distance > ctl.max_distance {
            return Err(invalid(format!(
                "control distance range [{}, {}] is empty",
                ctl.min_distance, ctl.max_distance
            )));
        }
        if !(0.0..=1.0).contains(&ctl.damping) {
            return Err(invalid(format!("damping {} outside [0, 1]", ctl.damping)));
        }
        if self.stars.count > self.stage.max_stars {
            return Err(invalid(format!(
                "{} stars exceed capacity {}",
                self.stars.count, self.stage.max_stars
            )));
        }
        if self.fixed_node_count() > self.stage.max_instances {
            return Err(invalid(format!(
                "{} fixed nodes exceed instance capacity {}",
                self.fixed_node_count(),
                self.stage.max_instances
            )));
        }
        if self.labels.size <= 0.0 || self.sun.label.size <= 0.0 {
            return Err(invalid("text size must be positive".into()));
        }
        if self.sun.radius <= 0.0 || self.sun.glow_radius <= 0.0 {
            return Err(invalid("sun radii must be positive".into()));
        }
        if let Some(stagger) = self.entrance_stagger {
            if stagger < 0.0 {
                return Err(invalid(format!("entrance stagger {stagger} is negative")));
            }
        }
        self.placement.validate()?;
        if let Some(meteors) = &self.meteors {
            meteors.validate()?;
        }
        Ok(())
    }

    /// Fold host overrides into this variant. The result is validated
    /// first; a rejected set of overrides leaves the variant untouched.
    pub fn apply(&mut self, overrides: &SceneOverrides) -> Result<(), SceneError> {
        let mut next = self.clone();
        next.fold(overrides);
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn fold(&mut self, overrides: &SceneOverrides) {
        if let Some(seed) = overrides.seed {
            self.stage.seed = seed;
        }
        if let Some(count) = overrides.star_count {
            self.stars.count = count;
        }
        if let Some(count) = overrides.meteor_count {
            match self.meteors.as_mut() {
                Some(meteors) => meteors.count = count,
                None => log::warn!("{}: no meteors in this scene, ignoring meteor_count", self.name),
            }
        }
        if let Some(speed) = overrides.auto_rotate_speed {
            self.controls.auto_rotate = speed != 0.0;
            self.controls.auto_rotate_speed = speed;
        }
        if let Some(text) = &overrides.sun_label {
            self.sun.label.text = text.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_valid() {
        let v = OrbitVariant::default();
        assert!(v.validate().is_ok());
        assert_eq!(v.fixed_node_count(), 3);
    }

    #[test]
    fn rejected_overrides_leave_variant_intact() {
        let mut v = OrbitVariant::default();
        let before = v.clone();
        let overrides = SceneOverrides {
            star_count: Some(1_000_000),
            sun_label: Some("Hola".into()),
            ..Default::default()
        };
        assert!(matches!(v.apply(&overrides), Err(SceneError::InvalidConfig(_))));
        assert_eq!(v, before);
        assert!(v.validate().is_ok());

        let ok = SceneOverrides { star_count: Some(10), ..Default::default() };
        v.apply(&ok).unwrap();
        assert_eq!(v.stars.count, 10);
    }

    #[test]
    fn label_palette_cycles() {
        let style = LabelStyle {
            palette: vec![Color::hex(0xff0000), Color::hex(0x00ff00)],
            ..Default::default()
        };
        assert_eq!(style.color(0), Color::hex(0xff0000));
        assert_eq!(style.color(3), Color::hex(0x00ff00));
        let empty = LabelStyle { palette: Vec::new(), ..Default::default() };
        assert_eq!(empty.color(4), Color::WHITE);
    }

    #[test]
    fn glowing_labels_emit_their_colour() {
        let style = LabelStyle { glow: Some(0.6), ..Default::default() };
        let m = style.material(0);
        assert_eq!(m.emissive, style.color(0));
        assert_eq!(m.emissive_intensity, 0.6);
        assert!(!m.unlit);
        assert!(LabelStyle::default().material(0).unlit);
    }

    #[test]
    fn overrides_apply() {
        let mut v = OrbitVariant::default();
        let o = SceneOverrides {
            seed: Some(9),
            star_count: Some(100),
            auto_rotate_speed: Some(0.3),
            sun_label: Some("Sol".into()),
            ..Default::default()
        };
        v.apply(&o).unwrap();
        assert_eq!(v.stage.seed, 9);
        assert_eq!(v.stars.count, 100);
        assert!(v.controls.auto_rotate);
        assert_eq!(v.sun.label.text, "Sol");
    }

    #[test]
    fn overrides_beyond_capacity_are_rejected() {
        let mut v = OrbitVariant::default();
        let o = SceneOverrides { star_count: Some(1_000_000), ..Default::default() };
        assert!(matches!(v.apply(&o), Err(SceneError::InvalidConfig(_))));
    }

    #[test]
    fn bad_camera_is_rejected() {
        let mut v = OrbitVariant::default();
        v.camera.near = 0.0;
        assert!(v.validate().is_err());
        let mut v = OrbitVariant::default();
        v.controls.min_distance = 500.0;
        assert!(v.validate().is_err());
    }
}
