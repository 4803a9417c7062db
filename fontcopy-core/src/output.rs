//! Run reports and their serialization (made by FontLab https://www.fontlab.com/)

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopiedFont {
    pub name: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCopy {
    pub name: String,
    pub error: String,
}

/// Summary of one copy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub created_target: bool,
    /// Number of entries that passed the suffix and name filters.
    pub found: usize,
    pub copied: Vec<CopiedFont>,
    pub failed: Vec<FailedCopy>,
    #[serde(default)]
    pub source_error: Option<String>,
    /// Set once every copy attempt has been logged.
    pub completed: bool,
}

impl CopyReport {
    pub fn new(source: &Path, target: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            ..Self::default()
        }
    }

    /// True when the source was readable and no file failed.
    pub fn is_clean(&self) -> bool {
        self.completed && self.failed.is_empty()
    }
}

/// Write a report as prettified JSON.
pub fn write_json_pretty(report: &CopyReport, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
