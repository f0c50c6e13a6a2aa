//! Background star cloud generation.

use crate::components::visual::Color;
use crate::renderer::stars::{StarBuffer, StarPoint};
use crate::systems::rng::Rng;

/// Colour picked per star from a single uniform draw.
/// Tints are tested in order; the first whose threshold the draw exceeds wins.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPalette {
    pub base: Color,
    pub tints: Vec<(f32, Color)>,
}

impl StarPalette {
    pub fn mono(color: Color) -> Self {
        Self {
            base: color,
            tints: Vec::new(),
        }
    }

    pub fn pick(&self, draw: f32) -> Color {
        self.tints
            .iter()
            .find(|(threshold, _)| draw > *threshold)
            .map(|(_, color)| *color)
            .unwrap_or(self.base)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarFieldConfig {
    pub count: usize,
    /// Edge length of the cube the stars fill, centred on the origin.
    pub extent: f32,
    pub size: f32,
    pub opacity: f32,
    pub additive: bool,
    pub palette: StarPalette,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            extent: 600.0,
            size: 0.7,
            opacity: 0.8,
            additive: false,
            palette: StarPalette::mono(Color::WHITE),
        }
    }
}

/// Fill `stars` with `config.count` points, uniformly spread over the cube.
pub fn generate_stars(config: &StarFieldConfig, rng: &mut Rng, stars: &mut StarBuffer) {
    stars.points.clear();
    stars.points.reserve(config.count);
    stars.size = config.size;
    stars.opacity = config.opacity;
    stars.additive = config.additive;

    for _ in 0..config.count {
        let position = [
            rng.centered(config.extent),
            rng.centered(config.extent),
            rng.centered(config.extent),
        ];
        let color = if config.palette.tints.is_empty() {
            config.palette.base
        } else {
            config.palette.pick(rng.next_f32())
        };
        stars.points.push(StarPoint {
            position,
            color: color.to_array(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_the_cube() {
        let config = StarFieldConfig { count: 500, extent: 600.0, ..Default::default() };
        let mut stars = StarBuffer::new();
        generate_stars(&config, &mut Rng::new(3), &mut stars);
        assert_eq!(stars.len(), 500);
        for star in &stars.points {
            for axis in star.position {
                assert!((-300.0..300.0).contains(&axis));
            }
            assert_eq!(star.color, [1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn palette_thresholds_pick_in_order() {
        let pink = Color::hex(0xff9de2);
        let blue = Color::hex(0x7b61ff);
        let palette = StarPalette {
            base: Color::WHITE,
            tints: vec![(0.9, pink), (0.8, blue)],
        };
        assert_eq!(palette.pick(0.95), pink);
        assert_eq!(palette.pick(0.85), blue);
        assert_eq!(palette.pick(0.5), Color::WHITE);
        assert_eq!(palette.pick(0.8), Color::WHITE);
    }

    #[test]
    fn regenerating_replaces_points() {
        let config = StarFieldConfig { count: 10, ..Default::default() };
        let mut stars = StarBuffer::new();
        let mut rng = Rng::new(1);
        generate_stars(&config, &mut rng, &mut stars);
        generate_stars(&config, &mut rng, &mut stars);
        assert_eq!(stars.len(), 10);
    }
}
