//! # Homography estimation
//!
//! A homography is the 3x3 projective transform relating two views of a plane,
//! defined up to a non-zero scale (8 DOF).
//!
//! - [`HomographyEstimator`]: accumulates correspondences and runs the estimate
//! - [`find_homography`]: one-shot estimate from two index-aligned point slices
//! - [`Homography`]: the estimated model and point transfer utilities

mod estimator;
pub use estimator::*;

mod model;
pub use model::*;

mod system;

use crate::NormalizationMode;

/// Parameters for the normalized DLT homography estimator.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HomographyParams {
    /// How each point set is conditioned before assembling the linear system.
    pub normalization: NormalizationMode,
    /// Minimum relative gap between the two smallest singular values of the system.
    pub min_relative_gap: f64,
    /// Relative tolerance below which an axis of a point set has zero spread.
    pub degenerate_tol: f64,
    /// Rescale the result so that `H[2][2] = 1`.
    pub fix_scale: bool,
    /// `H[2][2]` is treated as zero when `|H[2][2]| <= scale_eps · ‖H‖`.
    pub scale_eps: f64,
    /// Smallest accepted `|det|` of the unit-norm homography in normalized coordinates.
    pub singular_det_tol: f64,
}

impl Default for HomographyParams {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::PerAxis,
            min_relative_gap: 1e-10,
            degenerate_tol: 1e-12,
            fix_scale: true,
            scale_eps: 1e-12,
            singular_det_tol: 1e-12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_partial_json() -> Result<(), Box<dyn std::error::Error>> {
        let params: HomographyParams =
            serde_json::from_str(r#"{ "normalization": "Isotropic", "fix_scale": false }"#)?;
        assert_eq!(params.normalization, NormalizationMode::Isotropic);
        assert!(!params.fix_scale);
        assert_eq!(params.min_relative_gap, HomographyParams::default().min_relative_gap);
        Ok(())
    }
}
