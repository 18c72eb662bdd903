//! 3x3 matrix (single and double precision).

use crate::{Vec2F32, Vec2F64, Vec3F32, Vec3F64};

define_matrix_type!(
    /// 3x3 matrix (single precision).
    Mat3F32,
    glam::Mat3,
    f32,
    [f32; 9],
    Vec3F32,
    glam::Vec3,
    [x_axis, y_axis, z_axis]
);

define_matrix_type!(
    /// 3x3 matrix (double precision).
    Mat3F64,
    glam::DMat3,
    f64,
    [f64; 9],
    Vec3F64,
    glam::DVec3,
    [x_axis, y_axis, z_axis]
);

macro_rules! impl_mat3_extras {
    ($name:ident, $vec2:ident, $vec3:ident, $scalar:ty) => {
        impl $name {
            /// Multiply a 2D point, treating it as homogeneous with a trailing `1`.
            #[inline]
            pub fn mul_point(&self, p: $vec2) -> $vec3 {
                *self * p.to_homogeneous()
            }

            /// Cross-product (skew-symmetric) matrix `[v]ₓ` so that `[v]ₓ·u = v × u`.
            #[inline]
            pub fn skew(v: $vec3) -> Self {
                Self::from_row_major(&[
                    0.0, -v.z, v.y, //
                    v.z, 0.0, -v.x, //
                    -v.y, v.x, 0.0,
                ])
            }

            /// Rotation from z-x-z Euler angles `phi`, `theta`, `psi`.
            pub fn from_euler_zxz(phi: $scalar, theta: $scalar, psi: $scalar) -> Self {
                let (s_phi, c_phi) = phi.sin_cos();
                let (s_theta, c_theta) = theta.sin_cos();
                let (s_psi, c_psi) = psi.sin_cos();
                Self::from_row_major(&[
                    c_psi * c_phi - c_theta * s_phi * s_psi,
                    c_psi * s_phi + c_theta * c_phi * s_psi,
                    s_psi * s_theta,
                    -s_psi * c_phi - c_theta * s_phi * c_psi,
                    -s_psi * s_phi + c_theta * c_phi * c_psi,
                    c_psi * s_theta,
                    s_theta * s_phi,
                    -s_theta * c_phi,
                    c_theta,
                ])
            }
        }
    };
}

impl_mat3_extras!(Mat3F32, Vec2F32, Vec3F32, f32);
impl_mat3_extras!(Mat3F64, Vec2F64, Vec3F64, f64);
