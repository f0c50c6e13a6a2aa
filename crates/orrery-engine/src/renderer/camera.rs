use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::systems::picking::Ray;

/// Perspective camera looking from `position` at `target`.
/// Projection follows WebGL conventions (right-handed, clip z in [-1, 1]).
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// Eye position (w = 1).
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Recompute the aspect ratio after a viewport resize.
    /// Degenerate sizes (minimised windows) keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }

    /// World position → normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let on_frustum = inverse.project_point3(ndc.extend(0.5));
        Ray::new(self.position, on_frustum - self.position)
    }
}

/// Client pixel coordinates (origin top-left) → normalized device coordinates.
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(60.0, 16.0 / 9.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 30.0, 60.0))
    }

    #[test]
    fn target_projects_to_center() {
        let ndc = camera().project(Vec3::ZERO);
        assert_abs_diff_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ndc.y, 0.0, epsilon = 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_through(Vec2::ZERO);
        let expected = (cam.target - cam.position).normalize();
        assert_abs_diff_eq!(ray.direction.dot(expected), 1.0, epsilon = 1e-5);
        assert_eq!(ray.origin, cam.position);
    }

    #[test]
    fn ray_passes_through_projected_point() {
        let cam = camera();
        let p = Vec3::new(12.0, -3.0, 8.0);
        let ndc = cam.project(p);
        let ray = cam.ray_through(ndc.truncate());
        let to_p = (p - ray.origin).normalize();
        assert_abs_diff_eq!(ray.direction.dot(to_p), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn client_corners_map_to_ndc_corners() {
        assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn degenerate_viewport_keeps_aspect() {
        let mut cam = camera();
        cam.set_viewport(1024.0, 512.0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(1024.0, 0.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn uniform_is_20_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
        let u = camera().uniform();
        assert_eq!(u.eye, [0.0, 30.0, 60.0, 1.0]);
    }
}
