//! Paired t-test.
//!
//! Tests whether the mean of `x - y` differs from zero, using the Student t
//! distribution with `n - 1` degrees of freedom.

use ndarray::ArrayView2;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{Error, Result};
use crate::types::Alternative;

/// Outcome of one paired t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedTTest {
    /// t statistic of `x - y`. May be infinite when the differences are
    /// constant but non-zero.
    pub statistic: f64,
    /// Degrees of freedom, `n - 1`.
    pub df: f64,
    /// p-value under the requested alternative.
    pub pvalue: f64,
}

impl PairedTTest {
    fn undefined(df: f64) -> Self {
        Self {
            statistic: f64::NAN,
            df,
            pvalue: f64::NAN,
        }
    }
}

/// Paired t-test of `x` against `y`.
///
/// Degenerate inputs:
/// - fewer than two pairs: `NaN`
/// - all differences zero and both samples constant: `NaN`
/// - all differences zero but the samples vary: `t = 0`
/// - differences constant and non-zero: `t = ±inf`, p-value at the limit
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
pub fn paired_t_test(x: &[f64], y: &[f64], alternative: Alternative) -> PairedTTest {
    assert_eq!(x.len(), y.len(), "paired samples must have equal length");
    let n = x.len();
    let df = n as f64 - 1.0;
    if n < 2 {
        return PairedTTest::undefined(df);
    }

    let nf = n as f64;
    let mean = x.iter().zip(y).map(|(a, b)| a - b).sum::<f64>() / nf;
    let ss = x
        .iter()
        .zip(y)
        .map(|(a, b)| {
            let d = a - b - mean;
            d * d
        })
        .sum::<f64>();
    let se = (ss / df).sqrt() / nf.sqrt();

    let statistic = if se > 0.0 {
        mean / se
    } else if mean != 0.0 {
        mean.signum() * f64::INFINITY
    } else if is_constant(x) && is_constant(y) {
        return PairedTTest::undefined(df);
    } else {
        0.0
    };

    if statistic.is_nan() {
        return PairedTTest::undefined(df);
    }

    let dist = match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist,
        Err(_) => return PairedTTest::undefined(df),
    };
    let cdf = |t: f64| {
        if t == f64::INFINITY {
            1.0
        } else if t == f64::NEG_INFINITY {
            0.0
        } else {
            dist.cdf(t)
        }
    };

    let pvalue = match alternative {
        Alternative::Less => cdf(statistic),
        Alternative::Greater => cdf(-statistic),
        Alternative::TwoSided => (2.0 * cdf(-statistic.abs())).min(1.0),
    };

    PairedTTest {
        statistic,
        df,
        pvalue,
    }
}

/// Paired t-test per column of two configurations × voxels matrices.
///
/// Row `i` of `x` is paired with row `i` of `y`. Returns one p-value per
/// column, in column order.
///
/// # Errors
///
/// Returns [`Error::UnequalGroups`] if the row counts differ and
/// [`Error::ShapeMismatch`] if the column counts differ.
pub fn paired_t_test_columns(
    x: ArrayView2<f64>,
    y: ArrayView2<f64>,
    alternative: Alternative,
) -> Result<Vec<f64>> {
    if x.nrows() != y.nrows() {
        return Err(Error::UnequalGroups {
            base: x.nrows(),
            booksum: y.nrows(),
        });
    }
    if x.ncols() != y.ncols() {
        return Err(Error::shape("group voxel counts", x.shape(), y.shape()));
    }

    Ok(x
        .columns()
        .into_iter()
        .zip(y.columns())
        .map(|(xc, yc)| {
            let xs = xc.to_vec();
            let ys = yc.to_vec();
            paired_t_test(&xs, &ys, alternative).pvalue
        })
        .collect())
}

fn is_constant(v: &[f64]) -> bool {
    v.windows(2).all(|w| w[0] == w[1])
}
