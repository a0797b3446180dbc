//! End-to-end significance run.
//!
//! One call to [`run`] performs the whole analysis:
//! 1. Load the discourse indicator
//! 2. Sweep every configuration, extracting per-voxel correlations
//! 3. Stack each group into a configurations × voxels matrix
//! 4. Paired t-test per voxel
//! 5. Write the p-values
//!
//! Steps 1-4 are [`evaluate`], step 5 is [`write`]. Callers that report the
//! significant count before touching the output call them separately.

use std::path::PathBuf;

use crate::config::Config;
use crate::data::load_indicator;
use crate::error::Result;
use crate::output::write_pvalues;
use crate::statistics::{paired_t_test_columns, sampling_rng};
use crate::sweep::{sweep, CorrelationExtractor};
use crate::types::Alternative;

/// What to analyze: one feature, one subject, one tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Discourse feature name, e.g. `Characters`.
    pub feature: String,
    /// Subject identifier, e.g. `F`.
    pub subject: String,
    /// Tail of the paired test on `base - booksum`.
    pub alternative: Alternative,
}

impl Analysis {
    /// Create an analysis request.
    pub fn new(
        feature: impl Into<String>,
        subject: impl Into<String>,
        alternative: Alternative,
    ) -> Self {
        Self {
            feature: feature.into(),
            subject: subject.into(),
            alternative,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    /// The analysis that was run.
    pub analysis: Analysis,
    /// One p-value per voxel, in voxel order.
    pub pvalues: Vec<f64>,
    /// Where the p-values were written.
    pub output_path: PathBuf,
    /// Base configurations that contributed.
    pub n_base: usize,
    /// Booksum configurations that contributed.
    pub n_booksum: usize,
    /// Configurations skipped for lack of a prediction file.
    pub n_missing: usize,
    /// Threshold used for `n_significant`.
    pub significance_level: f64,
    /// Voxels with p-value below `significance_level`.
    pub n_significant: usize,
}

impl Report {
    /// Number of voxels tested.
    pub fn n_voxels(&self) -> usize {
        self.pvalues.len()
    }
}

/// Count p-values strictly below `level`. `NaN` never counts.
pub fn count_significant(pvalues: &[f64], level: f64) -> usize {
    pvalues.iter().filter(|&&p| p < level).count()
}

/// Run the full analysis and write its p-values.
///
/// # Errors
///
/// Fails if the indicator is missing or has too few tagged TRs, if either
/// group has no prediction files, if shapes disagree, or if the output cannot
/// be written. Missing individual prediction files are not errors.
pub fn run(config: &Config, analysis: &Analysis) -> Result<Report> {
    let report = evaluate(config, analysis)?;
    write(&report)?;
    Ok(report)
}

/// Compute the p-values of a run without writing anything.
///
/// The returned report already carries the path [`write`] will use.
///
/// # Errors
///
/// Same as [`run`], minus output failures.
pub fn evaluate(config: &Config, analysis: &Analysis) -> Result<Report> {
    tracing::info!(
        "Entered: {}, {}, models: {:?}",
        analysis.feature,
        analysis.subject,
        config.models
    );

    let indicator = load_indicator(&config.indicator_path(&analysis.feature))?;
    let extractor = CorrelationExtractor::new(&analysis.feature, &indicator, config.sample_size);
    tracing::info!(
        "{} of {} TRs tagged '{}', sampling {} per configuration",
        extractor.n_candidates(),
        indicator.len(),
        analysis.feature,
        config.sample_size
    );

    let mut rng = sampling_rng(config.seed);
    let collected = sweep(config, &analysis.subject, &extractor, &mut rng)?;

    let base = collected.base.stack()?;
    let booksum = collected.booksum.stack()?;
    let pvalues = paired_t_test_columns(base.view(), booksum.view(), analysis.alternative)?;

    let n_significant = count_significant(&pvalues, config.significance_level);
    tracing::info!(
        "{} of {} voxels below {}",
        n_significant,
        pvalues.len(),
        config.significance_level
    );

    Ok(Report {
        analysis: analysis.clone(),
        pvalues,
        output_path: config.output_path(
            analysis.alternative,
            &analysis.feature,
            &analysis.subject,
        ),
        n_base: collected.base.len(),
        n_booksum: collected.booksum.len(),
        n_missing: collected.missing.len(),
        significance_level: config.significance_level,
        n_significant,
    })
}

/// Write a report's p-values to its output path.
pub fn write(report: &Report) -> Result<()> {
    write_pvalues(&report.output_path, &report.pvalues)?;
    tracing::info!("Wrote {}", report.output_path.display());
    Ok(())
}
