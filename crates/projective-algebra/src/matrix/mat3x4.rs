//! 3x4 matrix (double precision).
//!
//! Stored as the left 3x3 block plus the last column, which is exactly the
//! layout of `glam::DAffine3`. Used for projection / camera matrices.

use crate::{Mat3F64, Vec3F64, Vec4F64};

/// 3x4 matrix (double precision).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
pub struct Mat3x4F64(pub glam::DAffine3);

impl Mat3x4F64 {
    /// Identity matrix `[I | 0]`.
    pub const IDENTITY: Self = Self(glam::DAffine3::IDENTITY);

    /// Create a matrix from its left 3x3 block and its last column.
    #[inline]
    pub fn from_block_col(block: Mat3F64, col: Vec3F64) -> Self {
        Self(glam::DAffine3::from_mat3_translation(block.0, col.into()))
    }

    /// Create a matrix from a row-major array.
    pub fn from_row_major(arr: &[f64; 12]) -> Self {
        let block = Mat3F64::from_row_major(&[
            arr[0], arr[1], arr[2], //
            arr[4], arr[5], arr[6], //
            arr[8], arr[9], arr[10],
        ]);
        let col = Vec3F64::new(arr[3], arr[7], arr[11]);
        Self::from_block_col(block, col)
    }

    /// Convert the matrix to a row-major array.
    pub fn to_row_major(&self) -> [f64; 12] {
        let mut out = [0.0; 12];
        for row in 0..3 {
            for col in 0..4 {
                out[row * 4 + col] = self.get(row, col);
            }
        }
        out
    }

    /// The left 3x3 block.
    #[inline]
    pub fn block(&self) -> Mat3F64 {
        Mat3F64(self.0.matrix3)
    }

    /// The last column.
    #[inline]
    pub fn last_col(&self) -> Vec3F64 {
        Vec3F64::from(self.0.translation)
    }

    /// Element at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 3` or `col >= 4`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        match col {
            3 => self.0.translation[row],
            _ => self.0.matrix3.col(col)[row],
        }
    }

    /// Returns `true` if every element is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Mat3x4F64 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul<Mat3x4F64> for Mat3F64 {
    type Output = Mat3x4F64;

    #[inline]
    fn mul(self, rhs: Mat3x4F64) -> Self::Output {
        Mat3x4F64::from_block_col(self * rhs.block(), self * rhs.last_col())
    }
}

// Treats the vector as homogeneous with a trailing `1`.
impl std::ops::Mul<Vec3F64> for Mat3x4F64 {
    type Output = Vec3F64;

    #[inline]
    fn mul(self, rhs: Vec3F64) -> Self::Output {
        Vec3F64::from(self.0.transform_point3(rhs.into()))
    }
}

impl std::ops::Mul<Vec4F64> for Mat3x4F64 {
    type Output = Vec3F64;

    #[inline]
    fn mul(self, rhs: Vec4F64) -> Self::Output {
        self.block() * rhs.truncate() + self.last_col() * rhs.w
    }
}

impl std::ops::Add for Mat3x4F64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_block_col(self.block() + rhs.block(), self.last_col() + rhs.last_col())
    }
}

impl std::ops::Sub for Mat3x4F64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_block_col(self.block() - rhs.block(), self.last_col() - rhs.last_col())
    }
}

impl std::ops::Mul<f64> for Mat3x4F64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_block_col(self.block() * rhs, self.last_col() * rhs)
    }
}

impl std::ops::Div<f64> for Mat3x4F64 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::from_block_col(self.block() / rhs, self.last_col() / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat3x4F64 {
        Mat3x4F64::from_row_major(&[
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0,
        ])
    }

    #[test]
    fn test_mat3x4_layout() {
        let m = sample();
        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m.get(2, 1), 10.0);
        assert_eq!(m.last_col(), Vec3F64::new(4.0, 8.0, 12.0));
        assert_eq!(
            m.to_row_major(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn test_mat3x4_mul_vectors() {
        let m = sample();
        let v3 = Vec3F64::new(1.0, 0.0, -1.0);
        assert_eq!(m * v3, Vec3F64::new(2.0, 6.0, 10.0));
        assert_eq!(m * v3.to_homogeneous(), m * v3);
        assert_eq!(
            m * Vec4F64::new(1.0, 0.0, -1.0, 0.0),
            Vec3F64::new(-2.0, -2.0, -2.0)
        );
    }

    #[test]
    fn test_mat3_mul_mat3x4() {
        let m = sample();
        let two = Mat3F64::IDENTITY * 2.0;
        assert_eq!(two * m, m * 2.0);
        assert_eq!((m * 2.0) / 2.0, m);
        assert_eq!(m + m - m, m);
        assert_eq!(Mat3F64::IDENTITY * Mat3x4F64::IDENTITY, Mat3x4F64::IDENTITY);
    }

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let m = sample();
        let json = serde_json::to_string(&m)?;
        let back: Mat3x4F64 = serde_json::from_str(&json)?;
        assert_eq!(back, m);
        assert_eq!(back.to_row_major(), m.to_row_major());
        Ok(())
    }
}
