use projective::algebra::Vec2F64;
use projective::geometry::{HomographyError, HomographyEstimator};

#[test]
fn estimate_through_facade() -> Result<(), HomographyError> {
    let mut estimator = HomographyEstimator::new();
    for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)] {
        estimator.add_correspondence(Vec2F64::new(x, y), Vec2F64::new(x + 10.0, y - 5.0));
    }
    let h = estimator.estimate()?;
    assert!((h.matrix.get(0, 2) - 10.0).abs() < 1e-9);
    assert!((h.matrix.get(1, 2) + 5.0).abs() < 1e-9);
    Ok(())
}
