//! Terminal output.

use colored::Colorize;

use crate::pipeline::Report;

/// The one-line significant-voxel count printed after every run.
///
/// ```text
/// # voxels <0.05 for Characters_F: 1234
/// ```
pub fn format_significance_line(report: &Report) -> String {
    format!(
        "# voxels <{} for {}_{}: {}",
        report.significance_level,
        report.analysis.feature,
        report.analysis.subject,
        report.n_significant
    )
}

/// Multi-line human-readable run summary.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    let sep = "\u{2500}".repeat(62);

    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!(
        "  booksum - base: {} / subject {} ({})\n\n",
        report.analysis.feature.as_str().bold(),
        report.analysis.subject.as_str().bold(),
        report.analysis.alternative
    ));

    out.push_str(&format!(
        "    Configurations: {} base, {} booksum",
        report.n_base, report.n_booksum
    ));
    if report.n_missing > 0 {
        out.push_str(&format!(
            " {}",
            format!("({} missing)", report.n_missing).as_str().yellow()
        ));
    }
    out.push('\n');

    let pct = if report.n_voxels() > 0 {
        100.0 * report.n_significant as f64 / report.n_voxels() as f64
    } else {
        0.0
    };
    let count = format!("{} / {}", report.n_significant, report.n_voxels());
    let count = if report.n_significant > 0 {
        count.as_str().green().to_string()
    } else {
        count
    };
    out.push_str(&format!(
        "    Significant:    {} voxels ({:.1}%) at p < {}\n",
        count, pct, report.significance_level
    ));

    let n_undefined = report.pvalues.iter().filter(|p| p.is_nan()).count();
    if n_undefined > 0 {
        out.push_str(&format!(
            "    Undefined:      {} voxels (zero variance)\n",
            n_undefined
        ));
    }

    out.push_str(&format!(
        "    Output:         {}\n",
        report.output_path.display()
    ));
    out.push_str(&sep);
    out.push('\n');
    out
}
