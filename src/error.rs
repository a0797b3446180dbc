//! Error type shared by every stage of the analysis.

use std::path::PathBuf;

use crate::types::ModelGroup;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort an analysis run.
///
/// A missing prediction file is not an error: the sweep logs it and moves on.
/// Everything here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error on a specific file or directory.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A prediction archive could not be read.
    #[error("failed to read npz archive {}: {source}", path.display())]
    Npz {
        /// Archive path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: ndarray_npy::ReadNpzError,
    },

    /// A standalone `.npy` file could not be read.
    #[error("failed to read npy file {}: {source}", path.display())]
    Npy {
        /// Array path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: ndarray_npy::ReadNpyError,
    },

    /// A pickle could not be decoded or encoded.
    #[error("pickle error on {}: {source}", path.display())]
    Pickle {
        /// Pickle path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_pickle::Error,
    },

    /// The JSON run summary could not be serialized.
    #[error("failed to serialize run summary: {0}")]
    Json(#[from] serde_json::Error),

    /// A prediction archive lacks one of its two arrays.
    #[error("array '{key}' not found in {}; archive holds {found:?}", path.display())]
    MissingArray {
        /// Archive path.
        path: PathBuf,
        /// Expected array key.
        key: String,
        /// Array names actually present.
        found: Vec<String>,
    },

    /// The indicator holds something other than a flat list of numbers.
    #[error("invalid discourse indicator {}: {message}", path.display())]
    InvalidIndicator {
        /// Indicator path.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// Two arrays that must align do not.
    #[error("shape mismatch in {context}: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Which pair of arrays disagreed.
        context: String,
        /// Shape of the first array.
        left: Vec<usize>,
        /// Shape of the second array.
        right: Vec<usize>,
    },

    /// Too few TRs carry the discourse feature to draw the requested sample.
    #[error("insufficient TRs for feature '{feature}': got {got}, need {needed}")]
    InsufficientTimepoints {
        /// Discourse feature name.
        feature: String,
        /// Number of TRs flagged in the indicator.
        got: usize,
        /// Requested sample size.
        needed: usize,
    },

    /// A sampled TR lies beyond the end of a prediction record.
    #[error("TR index {index} out of range for record with {n_timepoints} TRs")]
    TimepointOutOfRange {
        /// Offending TR index.
        index: usize,
        /// Number of TRs in the record.
        n_timepoints: usize,
    },

    /// No configuration of a group was found on disk.
    #[error("no prediction files found for the {0} group")]
    EmptyGroup(ModelGroup),

    /// The paired test needs one booksum configuration per base configuration.
    #[error("paired test needs equal configuration counts: {base} base vs {booksum} booksum")]
    UnequalGroups {
        /// Base configuration count.
        base: usize,
        /// Booksum configuration count.
        booksum: usize,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn shape(context: impl Into<String>, left: &[usize], right: &[usize]) -> Self {
        Error::ShapeMismatch {
            context: context.into(),
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}
