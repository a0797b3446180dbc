//! Fixed analysis parameters.

/// Models swept by default, de-duplicated and sorted.
pub const DEFAULT_MODELS: [&str; 8] = [
    "bart-base",
    "bart-booksum",
    "bigbird-base",
    "bigbird-booksum",
    "led-base",
    "led-booksum",
    "long-t5-base",
    "long-t5-booksum",
];

/// Encoder layers swept by default.
pub const DEFAULT_LAYERS: [u32; 7] = [6, 7, 8, 9, 10, 11, 12];

/// Context lengths (in words) swept by default.
pub const DEFAULT_SEQ_LENS: [u32; 6] = [20, 100, 200, 500, 700, 1000];

/// Number of TRs drawn per configuration.
///
/// Matches the TR count of the rarest discourse feature, so every feature is
/// compared on equally sized samples.
pub const DEFAULT_SAMPLE_SIZE: usize = 162;

/// Seed for the TR sampling generator.
pub const DEFAULT_SEED: u64 = 42;

/// Threshold used when counting significant voxels.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Model-name suffix marking the booksum fine-tuned variant.
pub const BOOKSUM_SUFFIX: &str = "-booksum";

/// Array key of the predicted responses inside a prediction archive.
pub const PREDICTED_KEY: &str = "preds_t";

/// Array key of the held-out actual responses inside a prediction archive.
pub const ACTUAL_KEY: &str = "test_t";

/// Directory component separating this comparison from others under the
/// output root.
pub const COMPARISON_DIR: &str = "booksum_minus_base";
