//! JSON run summaries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::Report;
use crate::types::Alternative;

/// Run metadata without the per-voxel p-values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Discourse feature.
    pub feature: String,
    /// Subject identifier.
    pub subject: String,
    /// Test tail.
    pub alternative: Alternative,
    /// Voxels tested.
    pub n_voxels: usize,
    /// Base configurations that contributed.
    pub n_base: usize,
    /// Booksum configurations that contributed.
    pub n_booksum: usize,
    /// Configurations skipped for lack of a prediction file.
    pub n_missing: usize,
    /// Voxels below `significance_level`.
    pub n_significant: usize,
    /// Threshold used for `n_significant`.
    pub significance_level: f64,
    /// Where the p-values were written.
    pub output_path: PathBuf,
}

impl From<&Report> for RunSummary {
    fn from(report: &Report) -> Self {
        Self {
            feature: report.analysis.feature.clone(),
            subject: report.analysis.subject.clone(),
            alternative: report.analysis.alternative,
            n_voxels: report.n_voxels(),
            n_base: report.n_base,
            n_booksum: report.n_booksum,
            n_missing: report.n_missing,
            n_significant: report.n_significant,
            significance_level: report.significance_level,
            output_path: report.output_path.clone(),
        }
    }
}

/// Serialize a report summary to a compact JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string(&RunSummary::from(report))?)
}

/// Serialize a report summary to a pretty-printed JSON string.
pub fn to_json_pretty(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RunSummary::from(report))?)
}

/// Write the pretty-printed summary to `path`, creating parent directories.
pub fn write_summary(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let json = to_json_pretty(report)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Analysis;

    fn make_report() -> Report {
        Report {
            analysis: Analysis::new("Characters", "F", Alternative::TwoSided),
            pvalues: vec![0.01, 0.2, f64::NAN, 0.03],
            output_path: PathBuf::from("out/booksum_minus_base/two-sided/Characters_F.pkl"),
            n_base: 168,
            n_booksum: 168,
            n_missing: 0,
            significance_level: 0.05,
            n_significant: 2,
        }
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"alternative\":\"two-sided\""));
        assert!(json.contains("\"n_voxels\":4"));
        assert!(json.contains("\"n_significant\":2"));
        // NaN p-values stay out of the summary
        assert!(!json.contains("NaN"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n'));
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RunSummary::from(&make_report()));
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("runs/summary.json");
        write_summary(&path, &make_report()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Characters"));
    }
}
