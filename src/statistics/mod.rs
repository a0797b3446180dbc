//! Statistical methods for the booksum-minus-base comparison.
//!
//! This module provides:
//! - Seeded sampling of TRs without replacement
//! - Per-voxel population Pearson correlation
//! - Per-voxel paired t-tests with one- or two-sided alternatives

mod correlation;
mod paired;
mod sampling;

pub use correlation::{pearson, pearson_columns};
pub use paired::{paired_t_test, paired_t_test_columns, PairedTTest};
pub use sampling::{sample_sorted, sampling_rng};
