//! Creation-time orbit parameters for the phrase at index `i` of `total`.

use std::f32::consts::{PI, TAU};
use crate::error::SceneError;
use crate::orbit::body::{OrbitPlane, OrbitShape};
use crate::systems::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusLayout {
    /// Orbits split `[min, max]` into `total` bands, each with up to
    /// `jitter` of random outward spread.
    Banded { min: f32, max: f32, jitter: f32 },
    /// Exactly `base + step·i`, unbounded.
    Stepped { base: f32, step: f32 },
}

impl RadiusLayout {
    fn radius(&self, index: usize, total: usize, rng: &mut Rng) -> f32 {
        match *self {
            RadiusLayout::Banded { min, max, jitter } => {
                let step = (max - min) / total.max(1) as f32;
                min + index as f32 * step + rng.next_f32() * jitter
            }
            RadiusLayout::Stepped { base, step } => base + index as f32 * step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltModel {
    /// Flat circles raised by a random offset and sheared by inclination.
    Offset { inclination_span: f32, vertical_span: f32 },
    /// Tilted circles spread evenly in azimuth, with a wobble.
    Fanned { inclination_span: f32, wobble_speed_max: f32, wobble_phase_max: f32 },
}

/// Speed magnitude drawn from `[min, min + span)`, direction 50/50.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBand {
    pub min: f32,
    pub span: f32,
}

impl SpeedBand {
    fn sample(&self, rng: &mut Rng) -> f32 {
        rng.range(self.min, self.min + self.span) * rng.sign()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    pub radius: RadiusLayout,
    pub speed: SpeedBand,
    pub tilt: TiltModel,
}

impl PlacementConfig {
    /// Basic scene: banded radii in [15, 60], fast orbits, offset tilt.
    pub fn banded() -> Self {
        Self {
            radius: RadiusLayout::Banded { min: 15.0, max: 60.0, jitter: 5.0 },
            speed: SpeedBand { min: 0.1, span: 0.2 },
            tilt: TiltModel::Offset { inclination_span: 1.0, vertical_span: 10.0 },
        }
    }

    /// Galaxy scene: radii 25 + 3i, slow orbits, fanned tilt.
    pub fn fanned() -> Self {
        Self {
            radius: RadiusLayout::Stepped { base: 25.0, step: 3.0 },
            speed: SpeedBand { min: 0.02, span: 0.05 },
            tilt: TiltModel::Fanned {
                inclination_span: PI * 0.3,
                wobble_speed_max: 1.5,
                wobble_phase_max: 10.0,
            },
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        match self.radius {
            RadiusLayout::Banded { min, max, jitter } => {
                if !(min >= 0.0 && max >= min && jitter >= 0.0) {
                    return Err(SceneError::InvalidConfig(format!(
                        "banded radius needs 0 <= min <= max and jitter >= 0 (got {min}, {max}, {jitter})"
                    )));
                }
            }
            RadiusLayout::Stepped { base, step } => {
                if !(base >= 0.0 && step >= 0.0) {
                    return Err(SceneError::InvalidConfig(format!(
                        "stepped radius needs non-negative base and step (got {base}, {step})"
                    )));
                }
            }
        }
        if !(self.speed.min >= 0.0 && self.speed.span >= 0.0) {
            return Err(SceneError::InvalidConfig("speed band must be non-negative".into()));
        }
        Ok(())
    }
}

/// Parameters chosen for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub shape: OrbitShape,
    pub angle: f32,
}

/// Draw orbit parameters for phrase `index` of `total`.
pub fn place(config: &PlacementConfig, index: usize, total: usize, rng: &mut Rng) -> Placement {
    let radius = config.radius.radius(index, total, rng);
    let speed = config.speed.sample(rng);
    let angle = rng.next_f32() * TAU;

    let shape = match config.tilt {
        TiltModel::Offset { inclination_span, vertical_span } => OrbitShape {
            plane: OrbitPlane::Offset,
            radius,
            speed,
            inclination: rng.centered(inclination_span),
            azimuth: 0.0,
            vertical_offset: rng.centered(vertical_span),
            wobble_speed: 0.0,
            wobble_phase: 0.0,
        },
        TiltModel::Fanned { inclination_span, wobble_speed_max, wobble_phase_max } => OrbitShape {
            plane: OrbitPlane::Fanned,
            radius,
            speed,
            inclination: rng.centered(inclination_span),
            azimuth: index as f32 / total.max(1) as f32 * TAU,
            vertical_offset: 0.0,
            wobble_speed: rng.next_f32() * wobble_speed_max,
            wobble_phase: rng.next_f32() * wobble_phase_max,
        },
    };

    Placement { shape, angle }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(config: &PlacementConfig, total: usize, seed: u64) -> Vec<Placement> {
        let mut rng = Rng::new(seed);
        (0..total).map(|i| place(config, i, total, &mut rng)).collect()
    }

    #[test]
    fn banded_radius_grows_up_to_jitter() {
        let config = PlacementConfig::banded();
        for seed in 1..20 {
            let placed = place_all(&config, 12, seed);
            for pair in placed.windows(2) {
                assert!(pair[1].shape.radius + 5.0 >= pair[0].shape.radius);
            }
            for p in &placed {
                assert!(p.shape.radius >= 15.0 && p.shape.radius < 65.0);
            }
        }
    }

    #[test]
    fn stepped_radius_is_exactly_linear() {
        let placed = place_all(&PlacementConfig::fanned(), 8, 5);
        for (i, p) in placed.iter().enumerate() {
            assert_eq!(p.shape.radius, 25.0 + 3.0 * i as f32);
        }
    }

    #[test]
    fn single_phrase_uses_full_band() {
        let mut rng = Rng::new(3);
        let p = place(&PlacementConfig::banded(), 0, 1, &mut rng);
        assert!(p.shape.radius >= 15.0 && p.shape.radius < 20.0);
    }

    #[test]
    fn speed_band_covers_both_directions() {
        let band = SpeedBand { min: 0.02, span: 0.05 };
        let mut rng = Rng::new(5);
        let speeds: Vec<f32> = (0..500).map(|_| band.sample(&mut rng)).collect();
        assert!(speeds.iter().all(|s| (0.02..0.07).contains(&s.abs())));
        assert!(speeds.iter().any(|s| *s > 0.0));
        assert!(speeds.iter().any(|s| *s < 0.0));
    }

    #[test]
    fn sampled_ranges_match_variants() {
        for p in place_all(&PlacementConfig::banded(), 50, 11) {
            let s = p.shape;
            assert!((0.1..0.3).contains(&s.speed.abs()));
            assert!((-0.5..0.5).contains(&s.inclination));
            assert!((-5.0..5.0).contains(&s.vertical_offset));
            assert!((0.0..TAU).contains(&p.angle));
            assert_eq!(s.plane, OrbitPlane::Offset);
        }
        for p in place_all(&PlacementConfig::fanned(), 50, 11) {
            let s = p.shape;
            assert!((0.02..0.07).contains(&s.speed.abs()));
            assert!(s.inclination.abs() <= PI * 0.15);
            assert!((0.0..1.5).contains(&s.wobble_speed));
            assert!((0.0..10.0).contains(&s.wobble_phase));
            assert_eq!(s.plane, OrbitPlane::Fanned);
        }
    }

    #[test]
    fn fanned_azimuth_spreads_evenly() {
        let placed = place_all(&PlacementConfig::fanned(), 4, 2);
        let azimuths: Vec<f32> = placed.iter().map(|p| p.shape.azimuth).collect();
        assert_eq!(azimuths, vec![0.0, TAU * 0.25, TAU * 0.5, TAU * 0.75]);
    }

    #[test]
    fn both_directions_occur() {
        let placed = place_all(&PlacementConfig::banded(), 64, 17);
        assert!(placed.iter().any(|p| p.shape.speed > 0.0));
        assert!(placed.iter().any(|p| p.shape.speed < 0.0));
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        let mut config = PlacementConfig::banded();
        config.radius = RadiusLayout::Banded { min: 60.0, max: 15.0, jitter: 5.0 };
        assert!(config.validate().is_err());
        assert!(PlacementConfig::banded().validate().is_ok());
        assert!(PlacementConfig::fanned().validate().is_ok());
    }
}
