use projective_algebra::{Mat3F64, Vec2F64};

use crate::HomographyError;

/// How the scale of a [`Normalization`] is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NormalizationMode {
    /// Scale each axis by `√2 / σ` using that axis' standard deviation.
    #[default]
    PerAxis,
    /// Scale both axes by `√2 / d̄`, where `d̄` is the mean distance to the centroid.
    Isotropic,
}

/// Conditioning transform that moves a point set's centroid to the origin and rescales it.
///
/// As a matrix:
///
/// ```text
/// | sx  0  -sx·cx |
/// | 0   sy -sy·cy |
/// | 0   0   1     |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    /// Centroid `(cx, cy)` of the point set.
    pub centroid: Vec2F64,
    /// Per-axis scale `(sx, sy)`; both components are equal in isotropic mode.
    pub scale: Vec2F64,
}

impl Normalization {
    /// The transform as a 3x3 matrix acting on homogeneous points.
    pub fn matrix(&self) -> Mat3F64 {
        let (c, s) = (self.centroid, self.scale);
        Mat3F64::from_row_major(&[
            s.x, 0.0, -c.x * s.x, //
            0.0, s.y, -c.y * s.y, //
            0.0, 0.0, 1.0,
        ])
    }

    /// The inverse transform as a 3x3 matrix, computed in closed form.
    pub fn inverse_matrix(&self) -> Mat3F64 {
        let (c, s) = (self.centroid, self.scale);
        Mat3F64::from_row_major(&[
            1.0 / s.x, 0.0, c.x, //
            0.0, 1.0 / s.y, c.y, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Apply the transform to a point.
    ///
    /// Equivalent to `(self.matrix() * p.to_homogeneous()).to_inhomogeneous()`,
    /// since the last row of the matrix is `(0, 0, 1)`.
    #[inline]
    pub fn apply(&self, p: Vec2F64) -> Vec2F64 {
        let d = p - self.centroid;
        Vec2F64::new(d.x * self.scale.x, d.y * self.scale.y)
    }
}

/// Compute the Hartley normalization of a point set.
///
/// Every point contributes to the centroid and to the spread estimate.
///
/// # Arguments
///
/// * `points` - The 2D points to condition.
/// * `mode` - How to derive the scale from the spread of the points.
/// * `tol` - Tolerance, relative to the largest absolute coordinate, below which an
///   axis is considered to have zero spread.
///
/// # Errors
///
/// * [`HomographyError::InsufficientData`] if `points` is empty.
/// * [`HomographyError::DegenerateConfiguration`] if a coordinate is not finite,
///   either axis has (numerically) zero standard deviation, or the spread
///   overflows.
///
/// Example:
///
/// ```
/// use projective_algebra::Vec2F64;
/// use projective_geometry::{hartley_normalization, NormalizationMode};
///
/// let pts = [
///     Vec2F64::new(0.0, 0.0),
///     Vec2F64::new(2.0, 0.0),
///     Vec2F64::new(2.0, 2.0),
///     Vec2F64::new(0.0, 2.0),
/// ];
/// let norm = hartley_normalization(&pts, NormalizationMode::PerAxis, 1e-12).unwrap();
/// assert_eq!(norm.centroid, Vec2F64::new(1.0, 1.0));
/// ```
pub fn hartley_normalization(
    points: &[Vec2F64],
    mode: NormalizationMode,
    tol: f64,
) -> Result<Normalization, HomographyError> {
    if points.is_empty() {
        return Err(HomographyError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(HomographyError::DegenerateConfiguration(format!(
            "point {i} has a non-finite coordinate"
        )));
    }

    let n = points.len() as f64;
    let centroid = points.iter().copied().sum::<Vec2F64>() / n;

    let (mut var_x, mut var_y) = (0.0, 0.0);
    let mut magnitude = 0.0f64;
    for p in points {
        let d = *p - centroid;
        var_x += d.x * d.x;
        var_y += d.y * d.y;
        magnitude = magnitude.max(p.x.abs()).max(p.y.abs());
    }
    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();

    let threshold = tol * magnitude;
    for (axis, std) in [("x", std_x), ("y", std_y)] {
        if !std.is_finite() {
            log::warn!("rejecting point set: spread along {axis} overflows");
            return Err(HomographyError::DegenerateConfiguration(format!(
                "standard deviation along the {axis} axis is not finite"
            )));
        }
        if !(std > threshold) {
            log::warn!("rejecting point set: standard deviation along {axis} is {std:e}");
            return Err(HomographyError::DegenerateConfiguration(format!(
                "zero variance along the {axis} axis"
            )));
        }
    }

    let scale = match mode {
        NormalizationMode::PerAxis => {
            Vec2F64::new(std::f64::consts::SQRT_2 / std_x, std::f64::consts::SQRT_2 / std_y)
        }
        NormalizationMode::Isotropic => {
            let mean_dist = points.iter().map(|p| (*p - centroid).length()).sum::<f64>() / n;
            let s = std::f64::consts::SQRT_2 / mean_dist;
            Vec2F64::new(s, s)
        }
    };

    if !scale.is_finite() || !(scale.x > 0.0 && scale.y > 0.0) {
        return Err(HomographyError::DegenerateConfiguration(
            "normalization scale is zero or not finite".to_string(),
        ));
    }

    log::debug!(
        "hartley normalization of {} points: centroid=({:.6}, {:.6}), scale=({:.6e}, {:.6e})",
        points.len(),
        centroid.x,
        centroid.y,
        scale.x,
        scale.y
    );

    Ok(Normalization { centroid, scale })
}
