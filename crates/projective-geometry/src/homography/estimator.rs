use projective_algebra::{Mat3F64, Vec2F64};
use projective_linalg::{solve_null_space, LinalgError, NullSpaceParams};

use super::model::frobenius_norm;
use super::system::build_dlt_system;
use super::{Homography, HomographyParams};
use crate::normalization::hartley_normalization;
use crate::HomographyError;

/// Accumulates point correspondences and estimates the homography relating them.
///
/// The left and right point sequences are index-aligned and always have the
/// same length. The estimator is plain data: share it across threads behind a
/// single lock.
///
/// Example:
///
/// ```
/// use projective_algebra::Vec2F64;
/// use projective_geometry::HomographyEstimator;
///
/// let mut estimator = HomographyEstimator::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
///     estimator.add_correspondence(Vec2F64::new(x, y), Vec2F64::new(2.0 * x, 2.0 * y));
/// }
/// let h = estimator.estimate().unwrap();
/// assert!((h.matrix.get(0, 0) - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HomographyEstimator {
    left: Vec<Vec2F64>,
    right: Vec<Vec2F64>,
    params: HomographyParams,
}

impl HomographyEstimator {
    /// Minimum number of correspondences needed by [`HomographyEstimator::estimate`].
    pub const MIN_CORRESPONDENCES: usize = 4;

    /// Create an empty estimator with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty estimator with the given parameters.
    pub fn with_params(params: HomographyParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// The parameters used by [`HomographyEstimator::estimate`].
    pub fn params(&self) -> &HomographyParams {
        &self.params
    }

    /// Replace the estimation parameters, keeping the correspondences.
    pub fn set_params(&mut self, params: HomographyParams) {
        self.params = params;
    }

    /// Remove every correspondence.
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Append a correspondence between a left and a right point.
    pub fn add_correspondence(&mut self, left: Vec2F64, right: Vec2F64) {
        self.left.push(left);
        self.right.push(right);
    }

    /// Number of accumulated correspondences.
    pub fn correspondence_count(&self) -> usize {
        self.left.len()
    }

    /// Returns `true` if no correspondence has been added since the last clear.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// The accumulated left points.
    pub fn left_points(&self) -> &[Vec2F64] {
        &self.left
    }

    /// The accumulated right points.
    pub fn right_points(&self) -> &[Vec2F64] {
        &self.right
    }

    /// Estimate the homography mapping the left points onto the right points.
    ///
    /// The correspondences are left untouched.
    ///
    /// # Errors
    ///
    /// See [`find_homography`].
    pub fn estimate(&self) -> Result<Homography, HomographyError> {
        find_homography(&self.left, &self.right, &self.params)
    }
}

impl Extend<(Vec2F64, Vec2F64)> for HomographyEstimator {
    fn extend<I: IntoIterator<Item = (Vec2F64, Vec2F64)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.add_correspondence(left, right);
        }
    }
}

impl FromIterator<(Vec2F64, Vec2F64)> for HomographyEstimator {
    fn from_iter<I: IntoIterator<Item = (Vec2F64, Vec2F64)>>(iter: I) -> Self {
        let mut estimator = Self::new();
        estimator.extend(iter);
        estimator
    }
}

/// Estimate a homography from point correspondences with the normalized DLT.
///
/// Both point sets are conditioned with a Hartley normalization, the `2N x 9`
/// DLT system is solved through its SVD and the solution is mapped back to the
/// original coordinates as `H = Nr⁻¹ · H' · Nl`.
///
/// # Arguments
///
/// * `left` - The source points.
/// * `right` - The destination points, index-aligned with `left`.
/// * `params` - Estimation parameters.
///
/// # Errors
///
/// * [`HomographyError::MismatchedLengths`] if the slices differ in length.
/// * [`HomographyError::InsufficientData`] with fewer than 4 correspondences.
/// * [`HomographyError::DegenerateConfiguration`] for non-finite, coincident or
///   axis-aligned collinear point sets, or a singular result.
/// * [`HomographyError::SolverFailure`] if the system's null space is not
///   one-dimensional (e.g. collinear points) or the solution is not finite.
pub fn find_homography(
    left: &[Vec2F64],
    right: &[Vec2F64],
    params: &HomographyParams,
) -> Result<Homography, HomographyError> {
    if left.len() != right.len() {
        return Err(HomographyError::MismatchedLengths {
            left: left.len(),
            right: right.len(),
        });
    }

    let n = left.len();
    if n < HomographyEstimator::MIN_CORRESPONDENCES {
        return Err(HomographyError::InsufficientData {
            required: HomographyEstimator::MIN_CORRESPONDENCES,
            actual: n,
        });
    }

    log::debug!("estimating homography from {n} correspondences");

    let norm_left = hartley_normalization(left, params.normalization, params.degenerate_tol)?;
    let norm_right = hartley_normalization(right, params.normalization, params.degenerate_tol)?;

    let left_n = left.iter().map(|p| norm_left.apply(*p)).collect::<Vec<_>>();
    let right_n = right.iter().map(|p| norm_right.apply(*p)).collect::<Vec<_>>();

    let a = build_dlt_system(&left_n, &right_n);
    let null_params = NullSpaceParams {
        min_relative_gap: params.min_relative_gap,
    };
    let null = solve_null_space(a.as_ref(), &null_params).map_err(|e| {
        log::warn!("homography system could not be solved: {e}");
        e
    })?;

    let h: [f64; 9] = null
        .vector
        .as_slice()
        .try_into()
        .map_err(|_| LinalgError::InvalidShape {
            rows: null.vector.len(),
            cols: 1,
        })?;
    let h_norm = Mat3F64::from_row_major(&h);

    // the null vector has unit norm, so this is scale independent
    let det = h_norm.determinant();
    if !(det.abs() > params.singular_det_tol) {
        log::warn!("rejecting singular homography, det = {det:e}");
        return Err(HomographyError::DegenerateConfiguration(format!(
            "estimated homography is singular (det = {det:e})"
        )));
    }

    let matrix = norm_right.inverse_matrix() * h_norm * norm_left.matrix();
    if !matrix.is_finite() {
        return Err(LinalgError::NonFinite.into());
    }

    let homography = if params.fix_scale {
        Homography::with_fixed_scale(matrix, params.scale_eps)
    } else {
        Homography {
            matrix: matrix / frobenius_norm(&matrix),
            scale_fixed: false,
        }
    };
    if !homography.matrix.is_finite() {
        return Err(LinalgError::NonFinite.into());
    }

    log::debug!(
        "homography estimated: residual={:e}, relative gap={:e}, scale fixed={}",
        null.smallest_singular_value(),
        null.relative_gap(),
        homography.scale_fixed
    );

    Ok(homography)
}
