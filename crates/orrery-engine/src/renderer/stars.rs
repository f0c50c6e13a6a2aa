use bytemuck::{Pod, Zeroable};

/// One background star: position and color. 6 floats = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StarPoint {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl StarPoint {
    pub const FLOATS: usize = 6;
}

/// Static point cloud drawn behind everything else.
/// Built once at init; never touched by the frame loop.
#[derive(Debug, Clone)]
pub struct StarBuffer {
    pub points: Vec<StarPoint>,
    /// Point size in world units.
    pub size: f32,
    pub opacity: f32,
    pub additive: bool,
}

impl StarBuffer {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            size: 0.7,
            opacity: 0.8,
            additive: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

impl Default for StarBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_point_is_6_floats() {
        assert_eq!(std::mem::size_of::<StarPoint>(), StarPoint::FLOATS * 4);
    }
}
