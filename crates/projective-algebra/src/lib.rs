//! Fixed-size linear algebra value types for projective geometry.
//!
//! This crate provides:
//! - Vector types in 2, 3 and 4 dimensions, with homogeneous conversions
//! - Matrix types (2x2, 3x3, 3x4) as newtypes over the `glam` backend
//! - Camera matrix helpers

mod camera;
mod matrix;
mod vector;

pub use camera::{camera_matrix, camera_position, camera_rotation};
pub use matrix::{Mat2F32, Mat2F64, Mat3F32, Mat3F64, Mat3x4F64};
pub use vector::{Vec2F32, Vec2F64, Vec3F32, Vec3F64, Vec4F32, Vec4F64};

/// 2D point with double precision coordinates.
pub type Point2F64 = Vec2F64;

/// 2D point with single precision coordinates.
pub type Point2F32 = Vec2F32;
