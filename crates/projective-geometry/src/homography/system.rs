use projective_algebra::Vec2F64;
use projective_linalg::DMatF64;

/// Assemble the `2N x 9` DLT coefficient matrix.
///
/// Each correspondence `(x, y) -> (x', y')` contributes the rows
///
/// ```text
/// [ -x  -y  -1   0   0   0   x·x'  y·x'  x' ]
/// [  0   0   0  -x  -y  -1   x·y'  y·y'  y' ]
/// ```
///
/// obtained from `r' × (H·l') = 0`, with `h` read row-major from `H`.
///
/// PRECONDITION: `left` and `right` have the same length.
pub(crate) fn build_dlt_system(left: &[Vec2F64], right: &[Vec2F64]) -> DMatF64 {
    debug_assert_eq!(left.len(), right.len());

    let mut a = DMatF64::zeros(2 * left.len(), 9);
    for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        let (x, y) = (l.x, l.y);
        let (xp, yp) = (r.x, r.y);

        let row = 2 * i;
        a.write(row, 0, -x);
        a.write(row, 1, -y);
        a.write(row, 2, -1.0);
        a.write(row, 6, x * xp);
        a.write(row, 7, y * xp);
        a.write(row, 8, xp);

        let row = 2 * i + 1;
        a.write(row, 3, -x);
        a.write(row, 4, -y);
        a.write(row, 5, -1.0);
        a.write(row, 6, x * yp);
        a.write(row, 7, y * yp);
        a.write(row, 8, yp);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlt_rows() {
        let left = [Vec2F64::new(2.0, 3.0)];
        let right = [Vec2F64::new(5.0, 7.0)];
        let a = build_dlt_system(&left, &right);
        assert_eq!((a.nrows(), a.ncols()), (2, 9));

        let row0 = (0..9).map(|j| a.read(0, j)).collect::<Vec<_>>();
        let row1 = (0..9).map(|j| a.read(1, j)).collect::<Vec<_>>();
        assert_eq!(row0, [-2.0, -3.0, -1.0, 0.0, 0.0, 0.0, 10.0, 15.0, 5.0]);
        assert_eq!(row1, [0.0, 0.0, 0.0, -2.0, -3.0, -1.0, 14.0, 21.0, 7.0]);
    }

    #[test]
    fn test_true_homography_is_in_null_space() {
        // H = [[2, 0, 1], [0, 3, -1], [0, 0, 1]]
        let h = [2.0, 0.0, 1.0, 0.0, 3.0, -1.0, 0.0, 0.0, 1.0];
        let left = [
            Vec2F64::new(0.0, 0.0),
            Vec2F64::new(1.0, 0.0),
            Vec2F64::new(1.0, 1.0),
            Vec2F64::new(0.0, 1.0),
            Vec2F64::new(0.5, 2.0),
        ];
        let right = left
            .iter()
            .map(|p| Vec2F64::new(2.0 * p.x + 1.0, 3.0 * p.y - 1.0))
            .collect::<Vec<_>>();

        let a = build_dlt_system(&left, &right);
        assert_eq!(a.nrows(), 10);
        for i in 0..a.nrows() {
            let dot = (0..9).map(|j| a.read(i, j) * h[j]).sum::<f64>();
            assert_eq!(dot, 0.0);
        }
    }
}
