//! Camera-facing orientation for labels and sprites.

use glam::{Mat3, Quat, Vec3};

/// Rotation that turns a node's +Z axis toward `target`, keeping `up` as
/// close to its +Y axis as possible.
///
/// Falls back to an alternate up vector when the view direction is parallel
/// to `up` (camera directly above or below), and to identity when the two
/// points coincide.
pub fn facing_rotation(from: Vec3, target: Vec3, up: Vec3) -> Quat {
    let forward = (target - from).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut right = up.cross(forward);
    if right.length_squared() < 1e-8 {
        let alt = if forward.z.abs() < 0.9 { Vec3::Z } else { Vec3::X };
        right = alt.cross(forward);
    }
    let right = right.normalize();
    let true_up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, forward))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_faces(from: Vec3, target: Vec3) {
        let q = facing_rotation(from, target, Vec3::Y);
        let forward = q * Vec3::Z;
        let expected = (target - from).normalize();
        assert_abs_diff_eq!(forward.dot(expected), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn forward_points_at_target() {
        assert_faces(Vec3::new(20.0, 3.0, -4.0), Vec3::new(0.0, 30.0, 60.0));
        assert_faces(Vec3::new(-33.0, -2.0, 10.0), Vec3::new(12.0, 45.0, -80.0));
        assert_faces(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn keeps_text_upright() {
        let q = facing_rotation(Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 50.0), Vec3::Y);
        let up = q * Vec3::Y;
        assert_abs_diff_eq!(up.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn camera_straight_above_is_handled() {
        assert_faces(Vec3::ZERO, Vec3::new(0.0, 50.0, 0.0));
        assert_faces(Vec3::ZERO, Vec3::new(0.0, -50.0, 0.0));
    }

    #[test]
    fn coincident_points_give_identity() {
        assert_eq!(facing_rotation(Vec3::ONE, Vec3::ONE, Vec3::Y), Quat::IDENTITY);
    }
}
