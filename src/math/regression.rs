//! Least-squares regression

use ndarray::{Array1, ArrayView1};

/// Gradient of the least-squares line through `(xs[i], ys[i])`
///
/// Returns `None` for fewer than two points, mismatched lengths or when all
/// abscissae coincide.
pub fn slope(xs: ArrayView1<'_, f64>, ys: ArrayView1<'_, f64>) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let x_mean = xs.mean()?;
    let y_mean = ys.mean()?;
    let dx: Array1<f64> = xs.mapv(|x| x - x_mean);
    let dy: Array1<f64> = ys.mapv(|y| y - y_mean);

    let variance = dx.dot(&dx);
    let covariance = dx.dot(&dy);

    (variance > 0.0).then(|| covariance / variance)
}

/// Gradient of the least-squares line through a list of points
pub fn slope_of_points(points: &[(f64, f64)]) -> Option<f64> {
    let xs: Array1<f64> = points.iter().map(|&(x, _)| x).collect();
    let ys: Array1<f64> = points.iter().map(|&(_, y)| y).collect();
    slope(xs.view(), ys.view())
}
