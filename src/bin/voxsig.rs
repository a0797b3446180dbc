//! CLI for the booksum-minus-base voxel significance test.
//!
//! # Usage
//!
//! ```bash
//! # Two-sided test for the Characters feature, subject F
//! voxsig --discourse-feature Characters --subject F --ttest-alternative two-sided
//!
//! # Data laid out under another directory, with a JSON summary
//! voxsig --discourse-feature Full --subject I --ttest-alternative less \
//!   --root /data/hp_fmri --summary-json runs/Full_I.json
//!
//! # Restrict the sweep
//! voxsig --discourse-feature Full --subject I --ttest-alternative greater \
//!   --models led-base,led-booksum --layers 6,12 --seq-lens 20,1000
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voxsig::output::{format_report, format_significance_line, write_summary};
use voxsig::{pipeline, Alternative, Analysis, Config, DEFAULT_SEED};

/// Identify voxels where booksum models differ significantly from base models
#[derive(Parser, Debug)]
#[command(name = "voxsig")]
#[command(about = "Per-voxel paired t-test of booksum vs base encoding correlations")]
#[command(version)]
struct Args {
    /// Discourse feature whose TRs are analyzed (e.g. Characters, Full)
    #[arg(long, alias = "discourse_feature")]
    discourse_feature: String,

    /// Subject identifier
    #[arg(long)]
    subject: String,

    /// Tail of the paired test on base - booksum: two-sided, less, greater
    #[arg(long, alias = "ttest_alternative")]
    ttest_alternative: Alternative,

    /// Directory the data and output layout is resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Seed for TR sampling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Models to sweep (comma-separated, overrides the default eight)
    #[arg(long)]
    models: Option<String>,

    /// Encoder layers to sweep (comma-separated)
    #[arg(long)]
    layers: Option<String>,

    /// Context lengths to sweep (comma-separated)
    #[arg(long)]
    seq_lens: Option<String>,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors, and skip the summary block
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(&args);
    tracing::info!("{:?}", args);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let analysis = Analysis::new(
        args.discourse_feature.clone(),
        args.subject.clone(),
        args.ttest_alternative,
    );
    tracing::info!("Output: {}", config.output_root().display());

    // The count is printed before the pickle is written
    let report = pipeline::evaluate(&config, &analysis).unwrap_or_else(|e| fail(&e));
    println!("{}", format_significance_line(&report));
    pipeline::write(&report).unwrap_or_else(|e| fail(&e));

    if !args.quiet {
        print!("{}", format_report(&report));
    }

    if let Some(path) = &args.summary_json {
        write_summary(path, &report).unwrap_or_else(|e| fail(&e));
    }
}

/// Every error's message already ends with its cause.
fn error_message(e: &voxsig::Error) -> String {
    format!("error: {}", e)
}

fn fail(e: &voxsig::Error) -> ! {
    eprintln!("{}", error_message(e));
    std::process::exit(1);
}

fn build_config(args: &Args) -> Result<Config, String> {
    let mut config = Config::default().root(&args.root).seed(args.seed);
    if let Some(models) = &args.models {
        config = config.models(non_empty(split_list(models), "--models")?);
    }
    if let Some(layers) = &args.layers {
        config = config.layers(parse_list(layers, "--layers")?);
    }
    if let Some(seq_lens) = &args.seq_lens {
        config = config.seq_lens(parse_list(seq_lens, "--seq-lens")?);
    }
    Ok(config)
}

fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty<T>(items: Vec<T>, flag: &str) -> Result<Vec<T>, String> {
    if items.is_empty() {
        return Err(format!("{} needs at least one value", flag));
    }
    Ok(items)
}

fn parse_list(s: &str, flag: &str) -> Result<Vec<u32>, String> {
    non_empty(split_list(s), flag)?
        .iter()
        .map(|item| {
            item.parse()
                .map_err(|_| format!("Invalid value '{}' for {}", item, flag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const REQUIRED: [&str; 7] = [
        "voxsig",
        "--discourse-feature",
        "Characters",
        "--subject",
        "F",
        "--ttest-alternative",
        "less",
    ];

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(REQUIRED.iter().chain(extra))
    }

    #[test]
    fn test_underscore_aliases() {
        let args = Args::try_parse_from([
            "voxsig",
            "--discourse_feature",
            "Full",
            "--subject",
            "I",
            "--ttest_alternative",
            "greater",
        ])
        .unwrap();
        assert_eq!(args.discourse_feature, "Full");
        assert_eq!(args.ttest_alternative, Alternative::Greater);
    }

    #[test]
    fn test_rejects_unknown_alternative() {
        let result = Args::try_parse_from([
            "voxsig",
            "--discourse-feature",
            "Full",
            "--subject",
            "I",
            "--ttest-alternative",
            "sideways",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.root, Path::new("."));
        assert_eq!(args.seed, DEFAULT_SEED);
        assert!(args.layers.is_none());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(parse(&["-v", "-q"]).is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("6, ,7", "--layers"), Ok(vec![6, 7]));
        assert_eq!(parse_list(" 20,1000 ", "--seq-lens"), Ok(vec![20, 1000]));
        assert_eq!(
            parse_list(",", "--layers"),
            Err("--layers needs at least one value".to_string())
        );
        assert_eq!(
            parse_list("6,x", "--layers"),
            Err("Invalid value 'x' for --layers".to_string())
        );
    }

    #[test]
    fn test_build_config_overrides() {
        let args = parse(&["--models", "led-booksum, led-base", "--layers", "9"]).unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.models, vec!["led-base", "led-booksum"]);
        assert_eq!(config.layers, vec![9]);
        assert_eq!(config.seq_lens, voxsig::DEFAULT_SEQ_LENS.to_vec());
    }

    #[test]
    fn test_build_config_rejects_empty_lists() {
        for (flag, value) in [("--models", " , "), ("--layers", " "), ("--seq-lens", "20,abc")] {
            let args = parse(&[flag, value]).unwrap();
            assert!(build_config(&args).is_err(), "{} {:?}", flag, value);
        }
    }

    #[test]
    fn test_error_message_names_cause_once() {
        let err = voxsig::Error::Io {
            path: "/data/Characters.pkl".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let message = error_message(&err);
        assert_eq!(message.matches("gone").count(), 1, "{}", message);
    }
}
