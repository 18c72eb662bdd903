use crate::LinalgError;

/// Parameters for [`solve_null_space`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NullSpaceParams {
    /// Minimum accepted value of `(σ[n-2] - σ[n-1]) / σ[0]`, where `σ` holds the
    /// singular values sorted in decreasing order.
    pub min_relative_gap: f64,
}

impl Default for NullSpaceParams {
    fn default() -> Self {
        Self {
            min_relative_gap: 1e-10,
        }
    }
}

/// Least-squares null vector of a matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct NullSpace {
    /// Unit right singular vector associated with the smallest singular value.
    pub vector: Vec<f64>,
    /// All singular values in decreasing order, one per column.
    ///
    /// Wide matrices are padded with zeros: the extra right singular vectors
    /// span the exact null space.
    pub singular_values: Vec<f64>,
}

impl NullSpace {
    /// The smallest singular value, i.e. the residual `‖A·h‖` of the solution.
    pub fn smallest_singular_value(&self) -> f64 {
        self.singular_values.last().copied().unwrap_or(0.0)
    }

    /// Relative gap `(σ[n-2] - σ[n-1]) / σ[0]` between the two smallest singular values.
    pub fn relative_gap(&self) -> f64 {
        relative_gap(&self.singular_values)
    }
}

fn relative_gap(sigma: &[f64]) -> f64 {
    let n = sigma.len();
    if n < 2 || sigma[0] <= 0.0 {
        return 0.0;
    }
    (sigma[n - 2] - sigma[n - 1]) / sigma[0]
}

/// Solve `min ‖A·h‖` subject to `‖h‖ = 1`.
///
/// The solution is the right singular vector of `a` associated with its smallest
/// singular value. The matrix may have any shape with at least two columns.
///
/// # Arguments
///
/// * `a` - The coefficient matrix with shape (rows, cols).
/// * `params` - Tolerances used to reject rank-deficient systems.
///
/// # Errors
///
/// * [`LinalgError::InvalidShape`] if `a` has no rows or fewer than two columns.
/// * [`LinalgError::NonFinite`] if `a` or its decomposition contains NaN/Inf.
/// * [`LinalgError::ZeroMatrix`] if every singular value is zero.
/// * [`LinalgError::RankDeficient`] if the null space is not one-dimensional.
///
/// Example:
///
/// ```
/// use projective_linalg::{solve_null_space, DMatF64, NullSpaceParams};
///
/// // x - y = 0 has the null vector (1, 1) / sqrt(2)
/// let a = DMatF64::from_fn(1, 2, |_, j| if j == 0 { 1.0 } else { -1.0 });
/// let null = solve_null_space(a.as_ref(), &NullSpaceParams::default()).unwrap();
/// assert!((null.vector[0].abs() - 0.5f64.sqrt()).abs() < 1e-12);
/// ```
pub fn solve_null_space(
    a: faer::MatRef<'_, f64>,
    params: &NullSpaceParams,
) -> Result<NullSpace, LinalgError> {
    let (rows, cols) = (a.nrows(), a.ncols());
    if rows == 0 || cols < 2 {
        return Err(LinalgError::InvalidShape { rows, cols });
    }

    for j in 0..cols {
        for i in 0..rows {
            if !a.read(i, j).is_finite() {
                return Err(LinalgError::NonFinite);
            }
        }
    }

    let svd = a.svd();
    let s = svd.s_diagonal();
    let v = svd.v();

    // pair every column of V with its singular value, zero beyond min(rows, cols)
    let mut order = (0..cols)
        .map(|j| {
            let sigma = if j < s.nrows() { s.read(j) } else { 0.0 };
            (sigma, j)
        })
        .collect::<Vec<_>>();

    if order.iter().any(|(sigma, _)| !sigma.is_finite()) {
        return Err(LinalgError::NonFinite);
    }
    order.sort_by(|a, b| b.0.total_cmp(&a.0));

    let singular_values = order.iter().map(|(sigma, _)| *sigma).collect::<Vec<_>>();
    if singular_values[0] <= 0.0 {
        return Err(LinalgError::ZeroMatrix);
    }

    let gap = relative_gap(&singular_values);
    log::debug!(
        "null space of {rows}x{cols} system: sigma_max={:e}, sigma_min={:e}, relative gap={gap:e}",
        singular_values[0],
        singular_values[cols - 1],
    );
    if !(gap >= params.min_relative_gap) {
        return Err(LinalgError::RankDeficient {
            gap,
            threshold: params.min_relative_gap,
        });
    }

    let (_, col) = order[cols - 1];
    let vector = (0..cols).map(|i| v.read(i, col)).collect::<Vec<_>>();
    if vector.iter().any(|x| !x.is_finite()) {
        return Err(LinalgError::NonFinite);
    }

    Ok(NullSpace {
        vector,
        singular_values,
    })
}
