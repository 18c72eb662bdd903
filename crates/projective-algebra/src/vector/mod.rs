//! Vector types module.
//!
//! This module provides vector types in single and double precision:
//! - Vec2: 2D vector / point
//! - Vec3: 3D vector, also the homogeneous form of a 2D point
//! - Vec4: 4D vector, also the homogeneous form of a 3D point

#[macro_use]
mod vec;

mod vec2;
mod vec3;
mod vec4;

pub use {vec2::Vec2F32, vec2::Vec2F64};
pub use {vec3::Vec3F32, vec3::Vec3F64};
pub use {vec4::Vec4F32, vec4::Vec4F64};
