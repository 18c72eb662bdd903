#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use projective_algebra as algebra;

#[doc(inline)]
pub use projective_linalg as linalg;

#[doc(inline)]
pub use projective_geometry as geometry;
