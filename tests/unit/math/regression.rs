//! Tests for least-squares slopes

#[cfg(test)]
mod tests {
    use ndarray::array;
    use soupcensus::math::regression::{slope, slope_of_points};

    // Tests an exact line recovers its gradient
    // Verified by dividing by the covariance instead of the variance
    #[test]
    fn test_exact_line() {
        let xs = array![0.0, 1.0, 2.0, 3.0];
        let ys = array![1.0, 3.0, 5.0, 7.0];
        let gradient = slope(xs.view(), ys.view()).unwrap();
        assert!((gradient - 2.0).abs() < 1e-12);
    }

    // Tests noisy points give the least-squares gradient
    // Verified by averaging pairwise gradients
    #[test]
    fn test_points_slope() {
        let gradient = slope_of_points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0)]).unwrap();
        assert!((gradient - 0.5).abs() < 1e-12);
    }

    // Tests degenerate inputs have no slope
    // Verified by returning zero for vertical data
    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(slope_of_points(&[(1.0, 2.0)]), None);
        assert_eq!(slope_of_points(&[(1.0, 2.0), (1.0, 5.0)]), None);
        let xs = array![0.0, 1.0];
        let ys = array![0.0];
        assert_eq!(slope(xs.view(), ys.view()), None);
    }
}
