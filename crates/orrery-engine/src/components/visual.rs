use crate::api::types::LabelId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How the host composites a visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
}

/// Geometry a node is drawn with. Sizes are in world units before node scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Solid sphere.
    Sphere { radius: f32 },
    /// Sphere drawn from the inside (back faces), used for glow shells.
    Shell { radius: f32 },
    /// Camera-facing textured quad (radial gradient halo).
    Halo { size: f32 },
    /// Extruded text. `width` is the approximate laid-out width.
    Text { label: LabelId, size: f32, depth: f32, width: f32 },
    /// Tapered cylinder along local Y (meteor trail).
    Streak { length: f32, radius_top: f32, radius_bottom: f32 },
}

impl Shape {
    /// Wire-format shape kind (must match the host renderer).
    pub fn kind(&self) -> f32 {
        match self {
            Shape::Sphere { .. } => 0.0,
            Shape::Shell { .. } => 1.0,
            Shape::Halo { .. } => 2.0,
            Shape::Text { .. } => 3.0,
            Shape::Streak { .. } => 4.0,
        }
    }

    /// Primary size parameter sent to the host.
    pub fn extent(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } | Shape::Shell { radius } => radius,
            Shape::Halo { size } => size,
            Shape::Text { size, .. } => size,
            Shape::Streak { length, .. } => length,
        }
    }

    pub fn label(&self) -> Option<LabelId> {
        match *self {
            Shape::Text { label, .. } => Some(label),
            _ => None,
        }
    }
}

/// Surface parameters for a visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Self-illumination colour, scaled by `emissive_intensity`.
    pub emissive: Color,
    pub emissive_intensity: f32,
    /// Ignore scene lights and show `color` as-is.
    pub unlit: bool,
    pub opacity: f32,
    pub blend: BlendMode,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            unlit: false,
            opacity: 1.0,
            blend: BlendMode::Normal,
        }
    }
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Material that ignores lighting.
    pub fn unlit(color: Color) -> Self {
        Self {
            color,
            unlit: true,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    /// Emissive colour premultiplied by intensity. Unlit materials emit their
    /// own colour at full strength.
    pub fn emission(&self) -> [f32; 3] {
        if self.unlit {
            return self.color.to_array();
        }
        let e = self.emissive;
        let k = self.emissive_intensity;
        [e.r * k, e.g * k, e.b * k]
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn additive(mut self) -> Self {
        self.blend = BlendMode::Additive;
        self
    }
}

/// Component for anything the host draws as a mesh or sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub shape: Shape,
    pub material: Material,
}

impl Visual {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    pub fn sphere(radius: f32, material: Material) -> Self {
        Self::new(Shape::Sphere { radius }, material)
    }

    pub fn shell(radius: f32, material: Material) -> Self {
        Self::new(Shape::Shell { radius }, material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Color::hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn emission_premultiplies_intensity() {
        let m = Material::new(Color::hex(0xffaa00)).with_emissive(Color::hex(0xff0000), 2.0);
        assert_eq!(m.emission(), [2.0, 0.0, 0.0]);
        let basic = Material::unlit(Color::hex(0x0000ff));
        assert_eq!(basic.emission(), [0.0, 0.0, 1.0]);
        assert_eq!(Material::default().emission(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn text_shape_exposes_label() {
        let shape = Shape::Text { label: LabelId(3), size: 0.8, depth: 0.1, width: 6.0 };
        assert_eq!(shape.label(), Some(LabelId(3)));
        assert_eq!(shape.kind(), 3.0);
        assert_eq!(Shape::Sphere { radius: 5.0 }.label(), None);
    }
}
