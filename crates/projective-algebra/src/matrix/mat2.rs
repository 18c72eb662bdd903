//! 2x2 matrix (single and double precision).

use crate::{Vec2F32, Vec2F64};

define_matrix_type!(
    /// 2x2 matrix (single precision).
    Mat2F32,
    glam::Mat2,
    f32,
    [f32; 4],
    Vec2F32,
    glam::Vec2,
    [x_axis, y_axis]
);

define_matrix_type!(
    /// 2x2 matrix (double precision).
    Mat2F64,
    glam::DMat2,
    f64,
    [f64; 4],
    Vec2F64,
    glam::DVec2,
    [x_axis, y_axis]
);

impl Mat2F32 {
    /// Counter-clockwise planar rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self(glam::Mat2::from_angle(angle))
    }
}

impl Mat2F64 {
    /// Counter-clockwise planar rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self(glam::DMat2::from_angle(angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mat2_row_major() {
        let m = Mat2F64::from_row_major(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.to_row_major(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn test_mat2_inverse() {
        let m = Mat2F64::from_row_major(&[4.0, 7.0, 2.0, 6.0]);
        let inv = m.try_inverse().expect("invertible");
        let id = m * inv;
        for r in 0..2 {
            for c in 0..2 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(id.get(r, c), expected, epsilon = 1e-12);
            }
        }

        let singular = Mat2F64::from_row_major(&[1.0, 2.0, 2.0, 4.0]);
        assert!(singular.try_inverse().is_none());
    }

    #[test]
    fn test_mat2_rotation() {
        let r = Mat2F64::from_angle(std::f64::consts::FRAC_PI_2);
        let v = r * Vec2F64::new(1.0, 0.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mat2_scalar_ops() {
        let m = Mat2F32::from_row_major(&[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((m / 2.0).to_row_major(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!((0.5 * m).to_row_major(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!((m - m), Mat2F32::ZERO);
        assert_eq!((m + m), m * 2.0);
    }
}
