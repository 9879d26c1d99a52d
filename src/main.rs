use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use decolint::config::ScanConfig;
use decolint::report::ConflictReport;
use decolint::scan;

mod format;
mod telemetry;

use format::OutputFormat;

/// Find Container invocations that set both a color and a decoration
///
/// In Flutter, `Container(color: ..., decoration: ...)` fails an assert at
/// runtime: the color argument is shorthand for
/// `decoration: BoxDecoration(color: ...)`, so setting both at once is
/// forbidden. decolint scans a Dart source tree and prints every Container
/// block that sets both properties at the top level of its argument list.
///
/// decolint is a heuristic character scanner, not a Dart parser: it tracks
/// delimiter depth to tell direct arguments from nested ones, and
/// delimiters inside string literals or comments can throw that tracking
/// off. Treat its findings as pointers, not proof.
///
/// EXAMPLES:
///
///   decolint                     # scan ./lib for Container conflicts
///   decolint app/lib             # scan a different tree
///   decolint --format json       # machine-readable output
///   decolint --name DecoratedBox --direct position --compound decoration
#[derive(Parser)]
#[command(name = "decolint")]
#[command(version, about)]
struct Cli {
    /// Root directory to scan recursively
    #[arg(default_value = "lib")]
    root: PathBuf,

    /// Constructor name to locate (whole-token match)
    #[arg(long, default_value = "Container")]
    name: String,

    /// Direct styling property of the conflict pair
    #[arg(long, default_value = "color")]
    direct: String,

    /// Compound styling property of the conflict pair
    #[arg(long, default_value = "decoration")]
    compound: String,

    /// Source file extension to scan, without the dot
    #[arg(long, default_value = "dart")]
    ext: String,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Number of scanner threads (default: one per core)
    #[arg(long)]
    jobs: Option<usize>,
}

#[derive(Serialize)]
struct ScanEnvelope {
    conflicts: Vec<ConflictReport>,
    files_scanned: usize,
    files_skipped: usize,
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("failed to size the scanner thread pool")?;
    }

    let cfg = ScanConfig {
        root: cli.root,
        target_name: cli.name,
        direct_property: cli.direct,
        compound_property: cli.compound,
        extension: cli.ext,
    };

    // Conflicts found vs none found both exit zero; only startup errors
    // (bad root) are fatal.
    let summary = scan::scan_tree(&cfg)?;

    match cli.format {
        OutputFormat::Text => {
            for report in &summary.reports {
                println!("{report}");
            }
            info!(
                files_scanned = summary.files_scanned,
                files_skipped = summary.files_skipped,
                conflicts = summary.reports.len(),
                "scan complete"
            );
        }
        OutputFormat::Json => {
            let envelope = ScanEnvelope {
                conflicts: summary.reports,
                files_scanned: summary.files_scanned,
                files_skipped: summary.files_skipped,
            };
            println!("{}", cli.format.serialize(&envelope)?);
        }
    }
    Ok(())
}
