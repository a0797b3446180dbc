//! Persisting and presenting run results.
//!
//! - Pickle: the per-voxel p-value list consumed by the brain-plot stage
//! - JSON: optional machine-readable run summary
//! - Terminal: human-readable summary lines

mod json;
mod pickle;
mod terminal;

pub use json::{to_json, to_json_pretty, write_summary, RunSummary};
pub use pickle::{read_pvalues, write_pvalues};
pub use terminal::{format_report, format_significance_line};
