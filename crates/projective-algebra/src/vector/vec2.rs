//! 2D vector types (single and double precision).

use super::vec3::{Vec3F32, Vec3F64};

define_vector_type!(
    /// 2D vector (single precision).
    Vec2F32,
    glam::Vec2,
    f32,
    [f32; 2],
    [x, y]
);

define_vector_type!(
    /// 2D vector (double precision).
    Vec2F64,
    glam::DVec2,
    f64,
    [f64; 2],
    [x, y]
);

macro_rules! impl_vec2_homogeneous {
    ($name:ident, $vec3:ident, $scalar:ty) => {
        impl $name {
            /// Lift the point to homogeneous coordinates by appending `1`.
            #[inline]
            pub fn to_homogeneous(self) -> $vec3 {
                $vec3::new(self.x, self.y, 1.0 as $scalar)
            }
        }
    };
}

impl_vec2_homogeneous!(Vec2F32, Vec3F32, f32);
impl_vec2_homogeneous!(Vec2F64, Vec3F64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2f32_basic() {
        let v = Vec2F32::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v[1], 2.0);
    }

    #[test]
    fn test_vec2f64_arithmetic() {
        let v1 = Vec2F64::new(1.0, 2.0);
        let v2 = Vec2F64::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2F64::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2F64::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2F64::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vec2F64::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vec2F64::new(1.5, 2.0));
        assert_eq!(v1.dot(v2), 11.0);
    }

    #[test]
    fn test_vec2f64_sum_mean() {
        let pts = [
            Vec2F64::new(0.0, 0.0),
            Vec2F64::new(2.0, 0.0),
            Vec2F64::new(2.0, 4.0),
            Vec2F64::new(0.0, 4.0),
        ];
        let mean = pts.iter().copied().sum::<Vec2F64>() / pts.len() as f64;
        assert_eq!(mean, Vec2F64::new(1.0, 2.0));
    }

    #[test]
    fn test_vec2f64_normalize() {
        let v = Vec2F64::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        let n = v.normalize().expect("non-zero vector");
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-12);
        assert_eq!(Vec2F64::ZERO.normalize(), None);
        assert_eq!(Vec2F64::ZERO.normalize_or_zero(), Vec2F64::ZERO);
    }

    #[test]
    fn test_vec2f64_to_homogeneous() {
        let p = Vec2F64::new(3.0, -1.0);
        assert_eq!(p.to_homogeneous(), Vec3F64::new(3.0, -1.0, 1.0));
        assert_eq!(p.to_homogeneous().to_inhomogeneous(), Some(p));
    }
}
