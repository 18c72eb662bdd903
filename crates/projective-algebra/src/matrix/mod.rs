//! Matrix types module.
//!
//! This module provides matrix types:
//! - Mat2: 2x2 matrix
//! - Mat3: 3x3 matrix
//! - Mat3x4: 3x4 matrix (projection / camera matrix)

#[macro_use]
mod mat;

mod mat2;
mod mat3;
mod mat3x4;

pub use mat3x4::Mat3x4F64;
pub use {mat2::Mat2F32, mat2::Mat2F64};
pub use {mat3::Mat3F32, mat3::Mat3F64};
