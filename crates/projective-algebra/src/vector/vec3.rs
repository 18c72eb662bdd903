//! 3D vector types (single and double precision).

use super::vec2::{Vec2F32, Vec2F64};
use super::vec4::{Vec4F32, Vec4F64};

define_vector_type!(
    /// 3D vector (single precision).
    Vec3F32,
    glam::Vec3,
    f32,
    [f32; 3],
    [x, y, z]
);

define_vector_type!(
    /// 3D vector (double precision).
    Vec3F64,
    glam::DVec3,
    f64,
    [f64; 3],
    [x, y, z]
);

macro_rules! impl_vec3_extras {
    ($name:ident, $glam_type:ty, $vec2:ident, $vec4:ident, $scalar:ty) => {
        impl $name {
            /// Cross product between two vectors.
            #[inline]
            pub fn cross(self, rhs: Self) -> Self {
                let a: $glam_type = self.into();
                let b: $glam_type = rhs.into();
                Self::from(a.cross(b))
            }

            /// Lift the point to homogeneous coordinates by appending `1`.
            #[inline]
            pub fn to_homogeneous(self) -> $vec4 {
                $vec4::new(self.x, self.y, self.z, 1.0 as $scalar)
            }

            /// Project a homogeneous 2D point back by dividing by `z`.
            ///
            /// Returns `None` for points at infinity (`z == 0`) or when the
            /// division does not produce finite coordinates.
            #[inline]
            pub fn to_inhomogeneous(self) -> Option<$vec2> {
                if self.z == 0.0 {
                    return None;
                }
                let p = $vec2::new(self.x / self.z, self.y / self.z);
                p.is_finite().then_some(p)
            }
        }
    };
}

impl_vec3_extras!(Vec3F32, glam::Vec3, Vec2F32, Vec4F32, f32);
impl_vec3_extras!(Vec3F64, glam::DVec3, Vec2F64, Vec4F64, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_basic() {
        let v = Vec3F32::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vec3_conversion() {
        let v = Vec3F64::new(1.0, 2.0, 3.0);
        let glam_v: glam::DVec3 = v.into();
        let back: Vec3F64 = glam_v.into();
        assert_eq!(v, back);
    }

    #[test]
    fn test_vec3_cross() {
        let x = Vec3F64::new(1.0, 0.0, 0.0);
        let y = Vec3F64::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3F64::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3F64::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_vec3_to_inhomogeneous() {
        let p = Vec3F64::new(4.0, -2.0, 2.0);
        assert_eq!(p.to_inhomogeneous(), Some(Vec2F64::new(2.0, -1.0)));
        assert_eq!(Vec3F64::new(1.0, 1.0, 0.0).to_inhomogeneous(), None);
        assert_eq!(Vec3F64::new(f64::NAN, 1.0, 1.0).to_inhomogeneous(), None);
    }

    #[test]
    fn test_vec3_to_homogeneous() {
        let p = Vec3F32::new(1.0, 2.0, 3.0);
        assert_eq!(p.to_homogeneous(), Vec4F32::new(1.0, 2.0, 3.0, 1.0));
    }
}
