//! Camera matrix helpers.
//!
//! A camera with orientation `R` (camera axes expressed in the world frame) and
//! centre `c` has the 3x4 matrix `[Rᵀ | −Rᵀ·c]`, which maps homogeneous world
//! points into the camera frame.

use crate::{Mat3F64, Mat3x4F64, Vec3F64};

/// Build the camera matrix `[Rᵀ | −Rᵀ·c]` from an orientation and a position.
///
/// # Arguments
///
/// * `rotation` - Camera orientation `R` in the world frame.
/// * `position` - Camera centre `c` in world coordinates.
pub fn camera_matrix(rotation: &Mat3F64, position: &Vec3F64) -> Mat3x4F64 {
    let rt = rotation.transpose();
    Mat3x4F64::from_block_col(rt, -(rt * *position))
}

/// Recover the camera orientation `R` from a camera matrix.
pub fn camera_rotation(camera: &Mat3x4F64) -> Mat3F64 {
    camera.block().transpose()
}

/// Recover the camera centre `c` from a camera matrix.
///
/// Assumes the left 3x3 block is orthonormal.
pub fn camera_position(camera: &Mat3x4F64) -> Vec3F64 {
    -(camera.block().transpose() * camera.last_col())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_roundtrip() {
        let r = Mat3F64::from_euler_zxz(0.4, 0.2, -0.7);
        let c = Vec3F64::new(1.0, -2.0, 5.0);
        let p = camera_matrix(&r, &c);

        let r_back = camera_rotation(&p);
        let c_back = camera_position(&p);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(r_back.get(i, j), r.get(i, j), epsilon = 1e-12);
            }
        }
        assert_relative_eq!(c_back.x, c.x, epsilon = 1e-12);
        assert_relative_eq!(c_back.y, c.y, epsilon = 1e-12);
        assert_relative_eq!(c_back.z, c.z, epsilon = 1e-12);
    }

    #[test]
    fn test_camera_centre_maps_to_origin() {
        let r = Mat3F64::from_euler_zxz(1.0, 0.5, 0.25);
        let c = Vec3F64::new(3.0, 0.0, -1.0);
        let p = camera_matrix(&r, &c);
        let x = p * c;
        assert_relative_eq!(x.length(), 0.0, epsilon = 1e-12);
    }
}
