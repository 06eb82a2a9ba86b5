use std::fs::File;
use std::io::{stderr, stdout, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use imuframe::framing::Stats;
use imuframe::report::{write_report, ReportOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Decode a framed IMU telemetry stream into a text report.
///
/// The report is written to stdout unless --output is given; the
/// total/valid/invalid summary always goes to stderr.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input telemetry file.
    input: PathBuf,

    /// Output file path; defaults to stdout.
    #[arg(short, long, value_name = "path")]
    output: Option<PathBuf>,

    /// Delete output file if it already exists.
    #[arg(long, action)]
    clobber: bool,

    /// Report column width.
    #[arg(short, long, default_value_t = 10, value_name = "chars")]
    column_width: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("IMUFRAME_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let src = File::open(&cli.input)
        .with_context(|| format!("failed to open input {:?}", cli.input))?;
    let src = BufReader::new(src);
    let opts = ReportOptions {
        column_width: cli.column_width,
    };

    let stats: Stats = match &cli.output {
        Some(path) => {
            if !cli.clobber && path.exists() {
                bail!("{path:?} exists; use --clobber");
            }
            let dest = File::create(path)
                .with_context(|| format!("failed to create output {path:?}"))?;
            write_report(src, BufWriter::new(dest), stderr(), &opts)?
        }
        None => write_report(src, stdout().lock(), stderr(), &opts)?,
    };

    debug!(
        total = stats.total,
        valid = stats.valid,
        "decode complete"
    );
    Ok(())
}
