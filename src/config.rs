//! Configuration for a significance run.
//!
//! Holds the sweep grid, the sampling parameters, and the on-disk layout of
//! inputs and outputs. Every path the pipeline touches is derived here.

use std::path::{Path, PathBuf};

use crate::constants::{
    BOOKSUM_SUFFIX, COMPARISON_DIR, DEFAULT_LAYERS, DEFAULT_MODELS, DEFAULT_SAMPLE_SIZE,
    DEFAULT_SEED, DEFAULT_SEQ_LENS, DEFAULT_SIGNIFICANCE_LEVEL,
};
use crate::types::{Alternative, ModelConfiguration, ModelGroup};

/// Configuration options for a booksum-minus-base run.
#[derive(Debug, Clone)]
pub struct Config {
    // =========================================================================
    // Sweep grid
    // =========================================================================

    /// Models to sweep. Kept de-duplicated and sorted.
    pub models: Vec<String>,

    /// Encoder layers to sweep.
    pub layers: Vec<u32>,

    /// Context lengths to sweep.
    pub seq_lens: Vec<u32>,

    /// Suffix identifying booksum models. Default: `-booksum`.
    pub booksum_suffix: String,

    // =========================================================================
    // Sampling and testing
    // =========================================================================

    /// Number of TRs drawn from the feature's TRs per configuration.
    ///
    /// Default: 162.
    pub sample_size: usize,

    /// Seed for the TR sampling generator. Default: 42.
    pub seed: u64,

    /// Threshold for counting a voxel as significant in the run report.
    ///
    /// Only affects the printed count; every p-value is written regardless.
    /// Default: 0.05.
    pub significance_level: f64,

    // =========================================================================
    // Layout
    // =========================================================================

    /// Directory every relative layout path is resolved against. Default: `.`.
    pub root: PathBuf,

    /// Directory of per-feature TR indicators.
    pub indicator_dir: PathBuf,

    /// Directory of per-model prediction archives.
    pub predictions_dir: PathBuf,

    /// Directory the p-value pickles are written under.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            layers: DEFAULT_LAYERS.to_vec(),
            seq_lens: DEFAULT_SEQ_LENS.to_vec(),
            booksum_suffix: BOOKSUM_SUFFIX.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            root: PathBuf::from("."),
            indicator_dir: PathBuf::from("data/TR_one_hot_for_features"),
            predictions_dir: PathBuf::from("2-encoding_predictions"),
            output_dir: PathBuf::from(
                "9-pearson-voxels-for-brain-plot/significant_voxel_indicator/all_models",
            ),
        }
    }
}

impl Config {
    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the models to sweep.
    ///
    /// Duplicates are dropped and the list is sorted, so the sweep order (and
    /// therefore the random stream each configuration sees) does not depend on
    /// how the list was written.
    ///
    /// # Panics
    ///
    /// Panics if `models` is empty.
    pub fn models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut models: Vec<String> = models.into_iter().map(Into::into).collect();
        models.sort();
        models.dedup();
        assert!(!models.is_empty(), "models must not be empty");
        self.models = models;
        self
    }

    /// Set the encoder layers to sweep.
    ///
    /// # Panics
    ///
    /// Panics if `layers` is empty.
    pub fn layers(mut self, layers: impl IntoIterator<Item = u32>) -> Self {
        let layers: Vec<u32> = layers.into_iter().collect();
        assert!(!layers.is_empty(), "layers must not be empty");
        self.layers = layers;
        self
    }

    /// Set the context lengths to sweep.
    ///
    /// # Panics
    ///
    /// Panics if `seq_lens` is empty.
    pub fn seq_lens(mut self, seq_lens: impl IntoIterator<Item = u32>) -> Self {
        let seq_lens: Vec<u32> = seq_lens.into_iter().collect();
        assert!(!seq_lens.is_empty(), "seq_lens must not be empty");
        self.seq_lens = seq_lens;
        self
    }

    /// Set the suffix marking booksum models.
    ///
    /// # Panics
    ///
    /// Panics if `suffix` is empty.
    pub fn booksum_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        assert!(!suffix.is_empty(), "booksum_suffix must not be empty");
        self.booksum_suffix = suffix;
        self
    }

    /// Set the number of TRs sampled per configuration.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn sample_size(mut self, n: usize) -> Self {
        assert!(n > 0, "sample_size must be > 0");
        self.sample_size = n;
        self
    }

    /// Set the sampling seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the threshold used to count significant voxels.
    ///
    /// # Panics
    ///
    /// Panics if `level` is not in (0, 1).
    pub fn significance_level(mut self, level: f64) -> Self {
        assert!(
            level > 0.0 && level < 1.0,
            "significance_level must be in (0, 1)"
        );
        self.significance_level = level;
        self
    }

    /// Set the root directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the indicator directory (relative to root unless absolute).
    pub fn indicator_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.indicator_dir = dir.into();
        self
    }

    /// Set the predictions directory (relative to root unless absolute).
    pub fn predictions_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.predictions_dir = dir.into();
        self
    }

    /// Set the output directory (relative to root unless absolute).
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    // =========================================================================
    // Grid and layout
    // =========================================================================

    /// Every configuration of the grid in sweep order: model, then layer,
    /// then sequence length.
    pub fn configurations(&self) -> Vec<ModelConfiguration> {
        let mut out =
            Vec::with_capacity(self.models.len() * self.layers.len() * self.seq_lens.len());
        for model in &self.models {
            for &layer in &self.layers {
                for &seq_len in &self.seq_lens {
                    out.push(ModelConfiguration::new(model.clone(), layer, seq_len));
                }
            }
        }
        out
    }

    /// Group a model belongs to under this configuration's suffix.
    pub fn group_of(&self, model: &str) -> ModelGroup {
        ModelGroup::from_model_name(model, &self.booksum_suffix)
    }

    /// Resolved output directory, before the comparison and tail components.
    pub fn output_root(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Pickled indicator for a discourse feature.
    pub fn indicator_path(&self, feature: &str) -> PathBuf {
        self.resolve(&self.indicator_dir).join(format!("{}.pkl", feature))
    }

    /// Prediction archive for one subject and configuration.
    pub fn prediction_path(&self, subject: &str, cfg: &ModelConfiguration) -> PathBuf {
        self.resolve(&self.predictions_dir)
            .join(&cfg.model)
            .join(format!(
                "predict_{}_with_{}_layer_{}_len_{}.npz",
                subject, cfg.model, cfg.layer, cfg.seq_len
            ))
    }

    /// Where the p-values of a run are written.
    pub fn output_path(&self, alternative: Alternative, feature: &str, subject: &str) -> PathBuf {
        self.output_root()
            .join(COMPARISON_DIR)
            .join(alternative.as_str())
            .join(format!("{}_{}.pkl", feature, subject))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
