//! Macro to define a matrix type.
//!
//! we provide a small `macro_rules!` helper so we can support multiple dimensions and
//! precisions without copy-pasting boilerplate.
//!
//! The generated types are thin `#[repr(transparent)]` newtypes over the
//! corresponding `glam` matrix type and delegate arithmetic to `glam`.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `glam_type`   - The underlying `glam` matrix type.
//! * `scalar`      - The scalar type.
//! * `array`       - The column-major array type (e.g. `[f32; 4]` for 2x2).
//! * `vec_type`    - The public vector type used for columns and mat-vec mul.
//! * `glam_vec`    - The underlying `glam` vector type.
//! * `cols`        - The column parameters (e.g. `[x_axis, y_axis]`).
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $scalar:ty,
        $array:ty,
        $vec_type:ty,
        $glam_vec:ty,
        [$($col:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $glam_type);

        impl $name {
            /// Create a new matrix from column vectors.
            #[inline]
            pub fn from_cols($($col: $vec_type),+) -> Self {
                Self(<$glam_type>::from_cols(
                    $(<$glam_vec>::from($col)),+
                ))
            }

            /// Create a new matrix from row vectors.
            #[inline]
            pub fn from_rows($($col: $vec_type),+) -> Self {
                Self::from_cols($($col),+).transpose()
            }

            /// Create a new matrix from a column-major array.
            #[inline]
            pub fn from_cols_array(arr: &$array) -> Self {
                Self(<$glam_type>::from_cols_array(arr))
            }

            /// Create a new matrix from a row-major array.
            #[inline]
            pub fn from_row_major(arr: &$array) -> Self {
                Self(<$glam_type>::from_cols_array(arr).transpose())
            }

            /// Convert the matrix to a row-major array.
            #[inline]
            pub fn to_row_major(&self) -> $array {
                self.0.transpose().to_cols_array()
            }

            /// Identity matrix.
            pub const IDENTITY: Self = Self(<$glam_type>::IDENTITY);

            /// All-zeros matrix.
            pub const ZERO: Self = Self(<$glam_type>::ZERO);

            /// Element at `row`, `col`.
            ///
            /// # Panics
            ///
            /// Panics if `row` or `col` is out of bounds.
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> $scalar {
                self.0.col(col)[row]
            }

            /// Transpose the matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self(self.0.transpose())
            }

            /// Determinant of the matrix.
            #[inline]
            pub fn determinant(&self) -> $scalar {
                self.0.determinant()
            }

            /// Inverse of the matrix.
            ///
            /// Returns `None` when the matrix is singular or the inverse is not finite.
            #[inline]
            pub fn try_inverse(&self) -> Option<Self> {
                let det = self.0.determinant();
                if det == 0.0 || !det.is_finite() {
                    return None;
                }
                let inv = self.0.inverse();
                inv.is_finite().then_some(Self(inv))
            }

            /// Returns `true` if every element is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.0.is_finite()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl std::ops::Deref for $name {
            type Target = $glam_type;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self(m)
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        // Conversions to and from column-major arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self(<$glam_type>::from_cols_array(&arr))
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(m: $name) -> Self {
                m.to_cols_array()
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name::from(self.0 * rhs.0)
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                <$vec_type>::from(self.0 * <$glam_vec>::from(rhs))
            }
        }

        impl std::ops::Add<$name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> Self::Output {
                $name::from(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub<$name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> Self::Output {
                $name::from(self.0 - rhs.0)
            }
        }

        // Matrix-scalar operations.
        impl std::ops::Mul<$scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                $name::from(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$name> for $scalar {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name::from(rhs.0 * self)
            }
        }

        impl std::ops::Div<$scalar> for $name {
            type Output = $name;

            #[inline]
            fn div(self, rhs: $scalar) -> Self::Output {
                $name::from(<$glam_type>::from_cols_array(
                    &self.0.to_cols_array().map(|v| v / rhs),
                ))
            }
        }
    };
}
