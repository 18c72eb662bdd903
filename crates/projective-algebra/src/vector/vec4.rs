//! 4D vector types (single and double precision).

use super::vec3::{Vec3F32, Vec3F64};

define_vector_type!(
    /// 4D vector (single precision).
    Vec4F32,
    glam::Vec4,
    f32,
    [f32; 4],
    [x, y, z, w]
);

define_vector_type!(
    /// 4D vector (double precision).
    Vec4F64,
    glam::DVec4,
    f64,
    [f64; 4],
    [x, y, z, w]
);

macro_rules! impl_vec4_inhomogeneous {
    ($name:ident, $vec3:ident) => {
        impl $name {
            /// Project a homogeneous 3D point back by dividing by `w`.
            ///
            /// Returns `None` for points at infinity (`w == 0`) or when the
            /// division does not produce finite coordinates.
            #[inline]
            pub fn to_inhomogeneous(self) -> Option<$vec3> {
                if self.w == 0.0 {
                    return None;
                }
                let p = $vec3::new(self.x / self.w, self.y / self.w, self.z / self.w);
                p.is_finite().then_some(p)
            }

            /// The first three components, dropping `w`.
            #[inline]
            pub fn truncate(self) -> $vec3 {
                $vec3::new(self.x, self.y, self.z)
            }
        }
    };
}

impl_vec4_inhomogeneous!(Vec4F32, Vec3F32);
impl_vec4_inhomogeneous!(Vec4F64, Vec3F64);
