//! Loading of encoding-model predictions and discourse indicators.
//!
//! Both inputs are produced upstream by the encoding and annotation stages;
//! this module only reads them.
//!
//! # Supported Formats
//!
//! - **Prediction archive**: `.npz` holding two same-shaped 2-D arrays,
//!   `preds_t` (predicted response) and `test_t` (held-out response), each
//!   TRs × voxels, stored as `f64` or `f32`.
//! - **Discourse indicator**: pickled flat list of 0/1 values (ints, bools or
//!   floats), one per TR. A `.npy` array next to the expected pickle is used
//!   when the pickle itself is absent.
//!
//! # Example
//!
//! ```ignore
//! use voxsig::data::{load_indicator, load_prediction_record};
//!
//! let indicator = load_indicator(Path::new("data/TR_one_hot_for_features/Characters.pkl"))?;
//! let record = load_prediction_record(Path::new("predict_F_with_led-base_layer_6_len_20.npz"))?;
//! println!("{} of {} TRs tagged", indicator.timepoints().len(), record.n_timepoints());
//! ```

mod indicator;
mod prediction;

pub use indicator::load_indicator;
pub use prediction::load_prediction_record;

use ndarray::{Array2, Axis};

use crate::error::{Error, Result};

/// Predicted and actual responses for one model configuration.
#[derive(Debug, Clone)]
pub struct PredictionRecord {
    predicted: Array2<f64>,
    actual: Array2<f64>,
}

impl PredictionRecord {
    /// Pair predicted and actual responses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the two matrices differ in shape.
    pub fn new(predicted: Array2<f64>, actual: Array2<f64>) -> Result<Self> {
        if predicted.shape() != actual.shape() {
            return Err(Error::shape(
                "predicted vs actual responses",
                predicted.shape(),
                actual.shape(),
            ));
        }
        Ok(Self { predicted, actual })
    }

    /// Predicted responses, TRs × voxels.
    pub fn predicted(&self) -> &Array2<f64> {
        &self.predicted
    }

    /// Held-out actual responses, TRs × voxels.
    pub fn actual(&self) -> &Array2<f64> {
        &self.actual
    }

    /// Number of TRs (rows).
    pub fn n_timepoints(&self) -> usize {
        self.predicted.nrows()
    }

    /// Number of voxels (columns).
    pub fn n_voxels(&self) -> usize {
        self.predicted.ncols()
    }

    /// Rows at `timepoints` of both matrices, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimepointOutOfRange`] if any index is past the last TR.
    pub fn select_timepoints(&self, timepoints: &[usize]) -> Result<(Array2<f64>, Array2<f64>)> {
        let n = self.n_timepoints();
        if let Some(&index) = timepoints.iter().find(|&&t| t >= n) {
            return Err(Error::TimepointOutOfRange {
                index,
                n_timepoints: n,
            });
        }
        Ok((
            self.predicted.select(Axis(0), timepoints),
            self.actual.select(Axis(0), timepoints),
        ))
    }
}

/// Per-TR flags marking where a discourse feature occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscourseIndicator {
    values: Vec<f64>,
}

impl DiscourseIndicator {
    /// Wrap raw per-TR values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of TRs covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the indicator covers no TRs.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices of TRs whose value is exactly 1, ascending.
    pub fn timepoints(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 1.0)
            .map(|(i, _)| i)
            .collect()
    }
}
