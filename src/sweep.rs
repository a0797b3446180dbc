//! Correlation extraction and the model/layer/length sweep.
//!
//! The sweep walks the grid in [`Config::configurations`] order, skips
//! configurations with no prediction file, and routes each correlation vector
//! to the base or booksum group. A single generator is threaded through every
//! extraction, so each configuration gets its own TR subsample while the run
//! as a whole stays reproducible.

use std::path::Path;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::config::Config;
use crate::data::{load_prediction_record, DiscourseIndicator, PredictionRecord};
use crate::error::{Error, Result};
use crate::statistics::{pearson_columns, sample_sorted};
use crate::types::{ModelConfiguration, ModelGroup};

/// Computes per-voxel correlations on a sampled subset of a feature's TRs.
#[derive(Debug, Clone)]
pub struct CorrelationExtractor {
    feature: String,
    candidates: Vec<usize>,
    sample_size: usize,
}

impl CorrelationExtractor {
    /// Create an extractor for the TRs flagged in `indicator`.
    pub fn new(feature: impl Into<String>, indicator: &DiscourseIndicator, sample_size: usize) -> Self {
        Self {
            feature: feature.into(),
            candidates: indicator.timepoints(),
            sample_size,
        }
    }

    /// Number of TRs carrying the feature.
    pub fn n_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Draw the sorted TR sample for one configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientTimepoints`] if the feature has fewer TRs
    /// than the sample size.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<usize>> {
        sample_sorted(&self.candidates, self.sample_size, rng).ok_or_else(|| {
            Error::InsufficientTimepoints {
                feature: self.feature.clone(),
                got: self.candidates.len(),
                needed: self.sample_size,
            }
        })
    }

    /// Per-voxel correlation of `record` over a fresh TR sample.
    pub fn extract<R: Rng + ?Sized>(
        &self,
        record: &PredictionRecord,
        rng: &mut R,
    ) -> Result<Array1<f64>> {
        let timepoints = self.sample(rng)?;
        let (predicted, actual) = record.select_timepoints(&timepoints)?;
        pearson_columns(predicted.view(), actual.view())
    }

    /// Load a prediction archive and extract its per-voxel correlations.
    pub fn extract_file<R: Rng + ?Sized>(&self, path: &Path, rng: &mut R) -> Result<Array1<f64>> {
        let record = load_prediction_record(path)?;
        self.extract(&record, rng)
    }
}

/// Correlation vectors collected for one group.
#[derive(Debug, Clone)]
pub struct GroupCorrelations {
    /// Which group these belong to.
    pub group: ModelGroup,
    /// Configurations found on disk, in sweep order.
    pub configurations: Vec<ModelConfiguration>,
    /// One per-voxel correlation vector per configuration.
    pub correlations: Vec<Array1<f64>>,
}

impl GroupCorrelations {
    fn new(group: ModelGroup) -> Self {
        Self {
            group,
            configurations: Vec::new(),
            correlations: Vec::new(),
        }
    }

    fn push(&mut self, cfg: ModelConfiguration, r: Array1<f64>) {
        self.configurations.push(cfg);
        self.correlations.push(r);
    }

    /// Number of configurations collected.
    pub fn len(&self) -> usize {
        self.correlations.len()
    }

    /// Whether no configuration was found.
    pub fn is_empty(&self) -> bool {
        self.correlations.is_empty()
    }

    /// Stack into a configurations × voxels matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGroup`] if nothing was collected and
    /// [`Error::ShapeMismatch`] if voxel counts disagree between
    /// configurations.
    pub fn stack(&self) -> Result<Array2<f64>> {
        let first = self
            .correlations
            .first()
            .ok_or(Error::EmptyGroup(self.group))?;
        let n_voxels = first.len();

        let mut flat = Vec::with_capacity(self.len() * n_voxels);
        for (cfg, r) in self.configurations.iter().zip(&self.correlations) {
            if r.len() != n_voxels {
                return Err(Error::shape(
                    format!("{} group voxel count at {}", self.group, cfg),
                    &[n_voxels],
                    &[r.len()],
                ));
            }
            flat.extend(r.iter().copied());
        }

        Array2::from_shape_vec((self.len(), n_voxels), flat).map_err(|_| {
            Error::shape(
                format!("{} group stack", self.group),
                &[self.len(), n_voxels],
                &[self.len() * n_voxels],
            )
        })
    }
}

/// Everything the sweep collected.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Base-model correlations.
    pub base: GroupCorrelations,
    /// Booksum-model correlations.
    pub booksum: GroupCorrelations,
    /// Configurations skipped because their prediction file was absent.
    pub missing: Vec<ModelConfiguration>,
}

/// Run the extractor over every configuration of `config` for `subject`.
///
/// Missing prediction files are logged and skipped. Any other failure aborts
/// the sweep.
pub fn sweep<R: Rng + ?Sized>(
    config: &Config,
    subject: &str,
    extractor: &CorrelationExtractor,
    rng: &mut R,
) -> Result<SweepResult> {
    let mut base = GroupCorrelations::new(ModelGroup::Base);
    let mut booksum = GroupCorrelations::new(ModelGroup::Booksum);
    let mut missing = Vec::new();

    for cfg in config.configurations() {
        let path = config.prediction_path(subject, &cfg);
        if !path.is_file() {
            tracing::warn!("Prediction file not found: subject_{}_{}", subject, cfg);
            missing.push(cfg);
            continue;
        }

        let r = extractor.extract_file(&path, rng)?;
        tracing::debug!("{}: {} voxels from {}", cfg, r.len(), path.display());

        match config.group_of(&cfg.model) {
            ModelGroup::Base => base.push(cfg, r),
            ModelGroup::Booksum => booksum.push(cfg, r),
        }
    }

    tracing::info!(
        "Collected {} base and {} booksum configurations ({} missing)",
        base.len(),
        booksum.len(),
        missing.len()
    );

    Ok(SweepResult {
        base,
        booksum,
        missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::sampling_rng;
    use ndarray::array;

    fn indicator(n: usize, every: usize) -> DiscourseIndicator {
        DiscourseIndicator::new((0..n).map(|i| if i % every == 0 { 1.0 } else { 0.0 }).collect())
    }

    #[test]
    fn test_extract_output_length_is_voxel_count() {
        let n_tr = 400;
        let predicted = Array2::from_shape_fn((n_tr, 5), |(i, j)| ((i * 7 + j * 3) % 11) as f64);
        let actual = Array2::from_shape_fn((n_tr, 5), |(i, j)| ((i * 5 + j) % 13) as f64);
        let record = PredictionRecord::new(predicted, actual).unwrap();

        let extractor = CorrelationExtractor::new("Characters", &indicator(n_tr, 2), 162);
        let r = extractor.extract(&record, &mut sampling_rng(42)).unwrap();
        assert_eq!(r.len(), 5);
        assert!(r.iter().all(|v| v.is_nan() || (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_extract_insufficient() {
        let record =
            PredictionRecord::new(Array2::zeros((300, 2)), Array2::zeros((300, 2))).unwrap();
        // 300 / 2 = 150 tagged TRs
        let extractor = CorrelationExtractor::new("Full", &indicator(300, 2), 162);
        match extractor.extract(&record, &mut sampling_rng(42)) {
            Err(Error::InsufficientTimepoints { got, needed, .. }) => {
                assert_eq!((got, needed), (150, 162));
            }
            other => panic!("Expected InsufficientTimepoints, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_indicator_longer_than_record() {
        let record =
            PredictionRecord::new(Array2::zeros((10, 2)), Array2::zeros((10, 2))).unwrap();
        let extractor = CorrelationExtractor::new("Full", &indicator(20, 1), 15);
        let err = extractor.extract(&record, &mut sampling_rng(1)).unwrap_err();
        assert!(matches!(err, Error::TimepointOutOfRange { .. }));
    }

    #[test]
    fn test_stack_empty_group() {
        let group = GroupCorrelations::new(ModelGroup::Booksum);
        match group.stack() {
            Err(Error::EmptyGroup(g)) => assert_eq!(g, ModelGroup::Booksum),
            other => panic!("Expected EmptyGroup, got {:?}", other),
        }
    }

    #[test]
    fn test_stack_rows_in_order() {
        let mut group = GroupCorrelations::new(ModelGroup::Base);
        group.push(ModelConfiguration::new("a-base", 6, 20), array![0.1, 0.2]);
        group.push(ModelConfiguration::new("a-base", 6, 100), array![0.3, 0.4]);
        assert_eq!(group.stack().unwrap(), array![[0.1, 0.2], [0.3, 0.4]]);
    }

    #[test]
    fn test_stack_ragged() {
        let mut group = GroupCorrelations::new(ModelGroup::Base);
        group.push(ModelConfiguration::new("a-base", 6, 20), array![0.1, 0.2]);
        group.push(ModelConfiguration::new("a-base", 6, 100), array![0.3]);
        assert!(matches!(group.stack(), Err(Error::ShapeMismatch { .. })));
    }
}
