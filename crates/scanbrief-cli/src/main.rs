mod display;

use anyhow::{Context, Result};
use clap::Parser;
use scanbrief_core::config::{load_config, ReportConfig};
use scanbrief_core::{build_report, generate_html_report, write_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scanbrief",
    version,
    about = "scanbrief — one HTML summary for your security scanner outputs",
    long_about = "Collect Grype, Semgrep, Bandit, Gitleaks and Trivy JSON outputs from an artifact directory \
and write a single self-contained HTML report next to them.\n\n\
Missing or malformed scanner files never fail the run; their sections show zero findings."
)]
struct Cli {
    /// Directory holding scanner JSON outputs; the report is written here too
    #[arg(short = 'd', long)]
    artifact_dir: Option<PathBuf>,

    /// Report file name inside the artifact directory
    #[arg(short, long)]
    output: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print a summary to the terminal
    #[arg(long)]
    summary: bool,

    /// Print the summarized report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let model = build_report(&config);

    let html = generate_html_report(&model);
    let path = write_report(&config.artifact_dir, &config.output_file, &html)
        .context("Failed to write report")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else if cli.summary {
        display::print_summary(&model, &path);
    } else {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays machine readable.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(dir) = &cli.artifact_dir {
        config.artifact_dir = dir.clone();
    }
    if let Some(output) = &cli.output {
        config.output_file = output.clone();
    }
    Ok(config)
}
