//! Copy pipeline (made by FontLab https://www.fontlab.com/)

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tempfile::NamedTempFile;

use crate::config::CopyConfig;
use crate::discovery::{DirDiscovery, FontDiscovery, FontFile};
use crate::output::{CopiedFont, CopyReport, FailedCopy};

/// Copies discovered font files from the source directory into the target directory.
///
/// Progress lines go to the `out` sink and failures to the `err` sink handed to
/// [`FontCopier::run`]; the binary wires these to stdout and stderr.
#[derive(Debug)]
pub struct FontCopier<D = DirDiscovery> {
    config: CopyConfig,
    discovery: D,
}

impl FontCopier<DirDiscovery> {
    pub fn new(config: CopyConfig) -> Self {
        let discovery = DirDiscovery::new(&config.source)
            .with_extensions(&config.extensions)
            .with_name_patterns(config.name_patterns.clone());
        Self { config, discovery }
    }
}

impl<D> FontCopier<D>
where
    D: FontDiscovery + Sync,
{
    /// Use a custom discovery backend; only `config.target` and `config.jobs` apply.
    pub fn with_discovery(config: CopyConfig, discovery: D) -> Self {
        Self { config, discovery }
    }

    /// Create the target directory when missing. Returns whether it was created.
    pub fn ensure_target_directory(&self, mut out: impl Write) -> Result<bool> {
        let target = &self.config.target;
        if target.exists() {
            return Ok(false);
        }

        fs::create_dir_all(target)
            .with_context(|| format!("creating directory {}", target.display()))?;
        writeln!(out, "Created directory: {}", target.display())?;
        Ok(true)
    }

    /// List the fonts to copy. Only listing failures surface here; logging
    /// the count is left to [`FontCopier::run`].
    pub fn list_font_files(&self) -> Result<Vec<FontFile>> {
        self.discovery.discover()
    }

    /// Copy one font into the target directory, replacing any file of the same name.
    pub fn copy_one(&self, font: &FontFile) -> Result<u64> {
        let dest = self.config.target.join(font.file_name());
        copy_atomically(&font.path, &dest)
    }

    /// Ensure the target, list the fonts, copy each one and log the outcome.
    ///
    /// Only a failure to create the target directory is returned as `Err`. An
    /// unreadable source is logged and recorded in the report, and per-file
    /// failures never stop the remaining copies.
    pub fn run(&self, mut out: impl Write, mut err: impl Write) -> Result<CopyReport> {
        let mut report = CopyReport::new(&self.config.source, &self.config.target);
        report.created_target = self.ensure_target_directory(&mut out)?;

        let fonts = match self.list_font_files() {
            Ok(fonts) => fonts,
            Err(e) => {
                writeln!(err, "Error reading font source directory: {e:#}")?;
                report.source_error = Some(format!("{e:#}"));
                return Ok(report);
            }
        };
        report.found = fonts.len();
        writeln!(out, "Found {} font files to copy", fonts.len())?;

        let outcomes = self.copy_all(&fonts)?;
        for (font, outcome) in fonts.iter().zip(outcomes) {
            match outcome {
                Ok(bytes) => {
                    writeln!(out, "Copied: {}", font.name)?;
                    report.copied.push(CopiedFont {
                        name: font.name.clone(),
                        bytes,
                    });
                }
                Err(e) => {
                    writeln!(err, "Error copying {}: {e:#}", font.name)?;
                    report.failed.push(FailedCopy {
                        name: font.name.clone(),
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        writeln!(out, "Font copy completed")?;
        report.completed = true;
        Ok(report)
    }

    /// Attempt every copy, keeping the outcomes in listing order.
    fn copy_all(&self, fonts: &[FontFile]) -> Result<Vec<Result<u64>>> {
        let run_copies = || -> Vec<Result<u64>> {
            fonts.par_iter().map(|font| self.copy_one(font)).collect()
        };

        if let Some(jobs) = self.config.jobs {
            let pool = ThreadPoolBuilder::new().num_threads(jobs).build()?;
            Ok(pool.install(run_copies))
        } else {
            Ok(run_copies())
        }
    }
}

/// Stage the bytes next to `dest` and rename over it, so `dest` is either the
/// old file or the complete new one.
fn copy_atomically(src: &Path, dest: &Path) -> Result<u64> {
    let mut reader = File::open(src).with_context(|| format!("opening {}", src.display()))?;
    let meta = reader
        .metadata()
        .with_context(|| format!("reading metadata of {}", src.display()))?;
    if !meta.is_file() {
        return Err(anyhow!("{} is not a regular file", src.display()));
    }

    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("staging a copy in {}", dir.display()))?;
    let bytes = io::copy(&mut reader, &mut staged)
        .with_context(|| format!("writing {}", dest.display()))?;
    staged
        .as_file()
        .sync_all()
        .with_context(|| format!("flushing staged copy of {}", dest.display()))?;
    fs::set_permissions(staged.path(), meta.permissions())
        .with_context(|| format!("setting permissions on {}", staged.path().display()))?;
    staged
        .persist(dest)
        .with_context(|| format!("replacing {}", dest.display()))?;

    Ok(bytes)
}
