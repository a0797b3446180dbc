//! # voxsig
//!
//! Per-voxel significance testing of booksum versus base encoding models.
//!
//! Given encoding-model predictions of fMRI responses for several
//! summarization language models (each available as a `-base` and a
//! `-booksum` fine-tuned variant), this crate answers one question per
//! voxel: does the booksum group predict the held-out response better (or
//! worse) than the base group on the TRs tagged with a discourse feature?
//!
//! The pipeline:
//! - Samples a fixed number of TRs carrying the discourse feature
//! - Computes per-voxel Pearson correlation between predicted and actual
//!   responses for every model/layer/sequence-length configuration on disk
//! - Stacks correlations per group and runs a paired t-test per voxel
//! - Writes the p-values as a pickled list
//!
//! ## Quick Start
//!
//! ```ignore
//! use voxsig::{pipeline, Alternative, Analysis, Config};
//!
//! let config = Config::default().root("/data/encoding");
//! let analysis = Analysis::new("Characters", "F", Alternative::Less);
//! let report = pipeline::run(&config, &analysis)?;
//!
//! println!("{} of {} voxels below 0.05", report.n_significant, report.n_voxels());
//! ```
//!
//! ## Randomness
//!
//! TR subsampling draws from an explicit [`rand_xoshiro::Xoshiro256PlusPlus`]
//! generator seeded from [`Config::seed`]. The generator is threaded through
//! the sweep in a fixed order, so two runs with the same seed and the same
//! files on disk select identical TRs.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod types;

// Functional modules
pub mod data;
pub mod output;
pub mod pipeline;
pub mod statistics;
pub mod sweep;

// Re-exports for public API
pub use config::Config;
pub use constants::{
    BOOKSUM_SUFFIX, DEFAULT_LAYERS, DEFAULT_MODELS, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
    DEFAULT_SEQ_LENS, DEFAULT_SIGNIFICANCE_LEVEL,
};
pub use error::{Error, Result};
pub use pipeline::{Analysis, Report};
pub use types::{Alternative, ModelConfiguration, ModelGroup};
