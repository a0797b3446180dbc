//! Population Pearson correlation, column by column.
//!
//! `r = mean(z(x) * z(y))` where `z` standardizes with the population
//! standard deviation (ddof = 0). This is algebraically the usual Pearson r.

use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

use crate::error::{Error, Result};

/// Pearson correlation of two equally long series.
///
/// Returns `NaN` for empty input or when either series is constant.
/// Finite results are clamped to `[-1, 1]` to absorb rounding.
///
/// # Panics
///
/// Panics if the series differ in length.
pub fn pearson(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    assert_eq!(x.len(), y.len(), "series must have equal length");
    let n = x.len();
    if n == 0 {
        return f64::NAN;
    }

    let (mx, sx) = mean_std(x);
    let (my, sy) = mean_std(y);
    if sx == 0.0 || sy == 0.0 {
        return f64::NAN;
    }

    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| ((a - mx) / sx) * ((b - my) / sy))
        .sum();

    // NaN passes through clamp unchanged
    (sum / n as f64).clamp(-1.0, 1.0)
}

/// Pearson correlation of each column of `x` with the same column of `y`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the matrices differ in shape.
pub fn pearson_columns(x: ArrayView2<f64>, y: ArrayView2<f64>) -> Result<Array1<f64>> {
    if x.shape() != y.shape() {
        return Err(Error::shape("correlation inputs", x.shape(), y.shape()));
    }
    Ok(Zip::from(x.columns())
        .and(y.columns())
        .map_collect(|xc, yc| pearson(xc, yc)))
}

/// Mean and population standard deviation.
fn mean_std(v: ArrayView1<f64>) -> (f64, f64) {
    let n = v.len() as f64;
    let mean = v.sum() / n;
    let var = v.iter().map(|&a| (a - mean) * (a - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}
