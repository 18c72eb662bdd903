#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types shared by the geometry routines.
pub mod error;

/// Planar homography estimation.
pub mod homography;

/// Hartley normalization of 2D point sets.
pub mod normalization;

pub use error::HomographyError;
pub use homography::{find_homography, Homography, HomographyEstimator, HomographyParams};
pub use normalization::{hartley_normalization, Normalization, NormalizationMode};
