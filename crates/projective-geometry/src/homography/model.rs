use projective_algebra::{Mat3F64, Vec2F64};

/// A planar homography mapping left points onto right points.
///
/// The matrix is defined up to a non-zero scale. When `scale_fixed` is `true`
/// it has been rescaled so that its bottom-right element is exactly `1`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Homography {
    /// The 3x3 homography matrix.
    pub matrix: Mat3F64,
    /// Whether the projective scale was fixed by setting `H[2][2] = 1`.
    pub scale_fixed: bool,
}

impl Homography {
    /// Wrap a matrix, rescaling it so that `H[2][2] = 1` unless that element is ~0.
    ///
    /// # Arguments
    ///
    /// * `matrix` - The homography matrix, in any scale.
    /// * `scale_eps` - `H[2][2]` is considered zero when `|H[2][2]| <= scale_eps · ‖H‖`.
    pub fn with_fixed_scale(matrix: Mat3F64, scale_eps: f64) -> Self {
        let h22 = matrix.get(2, 2);
        if h22.abs() <= scale_eps * frobenius_norm(&matrix) {
            log::warn!("H[2][2] = {h22:e} is too close to zero to fix the projective scale");
            return Self {
                matrix,
                scale_fixed: false,
            };
        }
        Self {
            matrix: matrix / h22,
            scale_fixed: true,
        }
    }

    /// Map a left point through the homography.
    ///
    /// Returns `None` when the point is mapped to infinity.
    #[inline]
    pub fn transfer(&self, p: Vec2F64) -> Option<Vec2F64> {
        self.matrix.mul_point(p).to_inhomogeneous()
    }

    /// Squared distance between the transferred left point and the right point.
    ///
    /// Returns `None` when the left point is mapped to infinity.
    pub fn transfer_error(&self, left: Vec2F64, right: Vec2F64) -> Option<f64> {
        self.transfer(left).map(|q| (q - right).length_squared())
    }

    /// Root-mean-square transfer distance over a set of correspondences.
    ///
    /// Returns `None` for empty or mismatched inputs, or when any left point is
    /// mapped to infinity.
    pub fn rms_transfer_error(&self, left: &[Vec2F64], right: &[Vec2F64]) -> Option<f64> {
        if left.is_empty() || left.len() != right.len() {
            return None;
        }
        let mut sum = 0.0;
        for (l, r) in left.iter().zip(right.iter()) {
            sum += self.transfer_error(*l, *r)?;
        }
        Some((sum / left.len() as f64).sqrt())
    }

    /// The homography mapping right points back onto left points.
    ///
    /// Returns `None` when the matrix is singular. The scale is fixed again if it
    /// was fixed on `self` and the new bottom-right element allows it.
    pub fn inverse(&self) -> Option<Self> {
        let inv = self.matrix.try_inverse()?;
        if self.scale_fixed {
            Some(Self::with_fixed_scale(inv, f64::EPSILON))
        } else {
            Some(Self {
                matrix: inv,
                scale_fixed: false,
            })
        }
    }
}

pub(crate) fn frobenius_norm(m: &Mat3F64) -> f64 {
    m.to_cols_array().iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_scale() {
        let m = Mat3F64::from_row_major(&[4.0, 0.0, 2.0, 0.0, 4.0, -2.0, 0.0, 0.0, 2.0]);
        let h = Homography::with_fixed_scale(m, 1e-12);
        assert!(h.scale_fixed);
        assert_eq!(
            h.matrix,
            Mat3F64::from_row_major(&[2.0, 0.0, 1.0, 0.0, 2.0, -1.0, 0.0, 0.0, 1.0])
        );
    }

    #[test]
    fn test_scale_left_when_corner_vanishes() {
        // maps the origin to infinity, H[2][2] == 0
        let m = Mat3F64::from_row_major(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
        let h = Homography::with_fixed_scale(m, 1e-12);
        assert!(!h.scale_fixed);
        assert_eq!(h.matrix, m);
        assert_eq!(h.transfer(Vec2F64::new(0.0, 3.0)), None);
        assert_eq!(
            h.transfer(Vec2F64::new(2.0, 4.0)),
            Some(Vec2F64::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_transfer_errors() {
        let m = Mat3F64::from_row_major(&[1.0, 0.0, 1.0, 0.0, 1.0, 2.0, 0.0, 0.0, 1.0]);
        let h = Homography::with_fixed_scale(m, 1e-12);

        let left = [Vec2F64::new(0.0, 0.0), Vec2F64::new(1.0, 1.0)];
        let right = [Vec2F64::new(1.0, 2.0), Vec2F64::new(2.0, 6.0)];
        assert_eq!(h.transfer_error(left[0], right[0]), Some(0.0));
        assert_eq!(h.transfer_error(left[1], right[1]), Some(9.0));
        assert_relative_eq!(
            h.rms_transfer_error(&left, &right).unwrap_or(f64::NAN),
            (4.5f64).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(h.rms_transfer_error(&left, &right[..1]), None);
        assert_eq!(h.rms_transfer_error(&[], &[]), None);
    }

    #[test]
    fn test_inverse() {
        let m = Mat3F64::from_row_major(&[2.0, 0.1, 3.0, -0.2, 1.5, 1.0, 0.001, 0.002, 1.0]);
        let h = Homography::with_fixed_scale(m, 1e-12);
        let inv = h.inverse().expect("invertible");
        assert!(inv.scale_fixed);
        assert_eq!(inv.matrix.get(2, 2), 1.0);

        let p = Vec2F64::new(12.0, -7.0);
        let back = h
            .transfer(p)
            .and_then(|q| inv.transfer(q))
            .expect("finite transfer");
        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);

        let singular = Homography::with_fixed_scale(Mat3F64::ZERO, 1e-12);
        assert!(singular.inverse().is_none());
    }
}
