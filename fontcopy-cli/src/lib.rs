//! fontcopy CLI (made by FontLab https://www.fontlab.com/)

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueHint};
use regex::Regex;

use fontcopy_core::config::{parse_extension_list, CopyConfig, DEFAULT_SOURCE, DEFAULT_TARGET};
use fontcopy_core::copier::FontCopier;
use fontcopy_core::output::{write_json_pretty, CopyReport};

/// CLI entrypoint for fontcopy.
#[derive(Debug, Parser)]
#[command(
    name = "fontcopy",
    about = "Copy web font files into project assets (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Directory holding the vendor font files
    #[arg(long = "source", default_value = DEFAULT_SOURCE, value_hint = ValueHint::DirPath)]
    source: PathBuf,

    /// Asset directory to copy the fonts into (created if missing)
    #[arg(long = "target", default_value = DEFAULT_TARGET, value_hint = ValueHint::DirPath)]
    target: PathBuf,

    /// File extensions to copy
    #[arg(
        short = 'e',
        long = "ext",
        value_delimiter = ',',
        default_values = ["woff", "woff2"],
        value_hint = ValueHint::Other
    )]
    extensions: Vec<String>,

    /// Regex patterns; a file must match at least one to be copied
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    /// Number of copy worker threads
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    /// Write a JSON report of the run to this file
    #[arg(long = "report", value_hint = ValueHint::FilePath)]
    report: Option<PathBuf>,
}

/// Parse CLI args and run the copy.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_copy(&cli)
}

fn run_copy(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let copier = FontCopier::new(config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let report = copier.run(stdout.lock(), stderr.lock())?;

    if let Some(path) = &cli.report {
        write_report(path, &report)?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<CopyConfig> {
    let extensions = parse_extension_list(&cli.extensions)?;
    let name_patterns = compile_patterns(&cli.name_patterns)?;

    if cli.jobs == Some(0) {
        return Err(anyhow!("--jobs must be at least 1"));
    }

    Ok(CopyConfig::new()
        .with_source(&cli.source)
        .with_target(&cli.target)
        .with_extensions(extensions)
        .with_name_patterns(name_patterns)
        .with_jobs(cli.jobs))
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

fn write_report(path: &Path, report: &CopyReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating report {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_json_pretty(report, &mut w)?;
    w.flush()
        .with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
