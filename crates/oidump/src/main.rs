//! oidump: dump a flattened introspection result as a nested JSON document.
//!
//! Reads the pre-order node list produced by an introspection run, rebuilds
//! the tree and writes it to stdout or a file. With `--expect`, the output is
//! also matched against a partial expected document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use introspect::exporter::DEFAULT_MAX_DEPTH;
use introspect::{compare_json, parse_result_file, serialize_with, ExportOptions, Mismatch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "oidump", about = "Dump a flattened introspection result as nested JSON")]
struct Cli {
    /// Flattened result (.json or .json.xz)
    input: PathBuf,

    /// Indented, multi-line output
    #[arg(long)]
    pretty: bool,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Partial expected document to match the output against
    #[arg(long)]
    expect: Option<PathBuf>,

    /// Reject results nested deeper than this
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=DEFAULT_MAX_DEPTH as u64)
    )]
    max_depth: usize,
}

impl Cli {
    fn options(&self) -> ExportOptions {
        ExportOptions::default()
            .pretty(self.pretty)
            .max_depth(self.max_depth)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays clean for the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if run(&cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Export the input; false when the output does not match `--expect`.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let result = parse_result_file(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    info!("Loaded {} nodes from {}", result.len(), cli.input.display());

    let document = serialize_with(&result, cli.options()).context("exporting JSON")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &document).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {} bytes to {}", document.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes()).context("writing stdout")?;
            stdout.flush().context("writing stdout")?;
        }
    }

    let Some(expect_path) = &cli.expect else {
        return Ok(true);
    };

    let mismatches = check_expected(expect_path, &document)?;
    if mismatches.is_empty() {
        info!("Output matches {}", expect_path.display());
        return Ok(true);
    }

    for mismatch in &mismatches {
        warn!("{}", mismatch);
    }
    eprintln!(
        "{} mismatch(es) against {}",
        mismatches.len(),
        expect_path.display()
    );
    Ok(false)
}

fn check_expected(expect_path: &Path, document: &str) -> anyhow::Result<Vec<Mismatch>> {
    let expected_text = fs::read_to_string(expect_path)
        .with_context(|| format!("reading {}", expect_path.display()))?;
    let expected: serde_json::Value = serde_json::from_str(&expected_text)
        .with_context(|| format!("parsing {}", expect_path.display()))?;
    let actual: serde_json::Value =
        serde_json::from_str(document).context("parsing exported document")?;
    Ok(compare_json(&expected, &actual))
}
