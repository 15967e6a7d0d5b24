//! CLI entry point for the student grade report.
//!
//! Reads `student_scores.txt` (or the given path), prints the report to
//! stdout and per-line warnings to stderr. Exits successfully whether or not
//! any data was processed.

use anyhow::Result;
use clap::Parser;
use grade_report::generator::DEFAULT_INPUT;
use grade_report::{OutputFormat, ReportGenerator, ReportOutcome};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grade_report")]
#[command(about = "Print a grade report from a student scores file", long_about = None)]
struct Cli {
    /// Scores file; the first line is a header and is ignored
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Print the report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Only warnings and above unless RUST_LOG says otherwise, so stderr
    // carries just the report diagnostics by default.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let generator = ReportGenerator::new(cli.input).with_format(format);

    let outcome = generator.generate(&mut io::stdout().lock(), &mut io::stderr())?;
    match outcome {
        ReportOutcome::Rendered { students } => debug!(students, "Done"),
        ReportOutcome::NoData => debug!("Done, no data"),
        ReportOutcome::InputUnavailable => debug!("Done, input unavailable"),
    }

    Ok(())
}
