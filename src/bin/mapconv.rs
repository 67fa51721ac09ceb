//! CLI binary for mapconv.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConverterConfig` and reports the first error.

use anyhow::{Context, Result};
use clap::Parser;
use mapconv::{convert, ConverterConfig};
use std::io;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # JSON to YAML (default dump format)
  echo '{"a": 1, "b": [true, null, "x"]}' | mapconv

  # YAML to JSON
  mapconv -d json < config.yaml

  # Indented JSON
  mapconv -d json --pretty < config.yaml

INPUT DETECTION:
  The input is decoded as JSON first. If that fails it is decoded as YAML.
  The document root must be a mapping; a null root is read as an empty one.
"#;

/// Convert a JSON or YAML mapping read from stdin to JSON or YAML on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "mapconv",
    version,
    about = "Convert a JSON or YAML mapping between formats",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Pull from input (ex: stdin).
    #[arg(short = 'l', long = "pull-from", default_value = "stdin")]
    pull_from: String,

    /// Map dump format (ex: yaml, json).
    #[arg(short = 'd', long = "dump-to", default_value = "yaml")]
    dump_to: String,

    /// Push to output (ex: stdout).
    #[arg(short = 's', long = "push-to", default_value = "stdout")]
    push_to: String,

    /// Indent JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries only the document, so logs always go to stderr.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;
    convert(&config).context("Conversion failed")?;
    Ok(())
}

/// Map CLI args to `ConverterConfig`.
fn build_config(cli: &Cli) -> Result<ConverterConfig> {
    ConverterConfig::builder()
        .pull_from(&cli.pull_from)
        .dump_to(&cli.dump_to)
        .push_to(&cli.push_to)
        .pretty(cli.pretty)
        .build()
        .context("Invalid configuration")
}
