//! Copy configuration (made by FontLab https://www.fontlab.com/)

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use regex::Regex;

/// Where fontsource publishes the Open Sans web fonts inside `node_modules`.
pub const DEFAULT_SOURCE: &str = "node_modules/@fontsource/open-sans/files";
/// Asset directory the web app bundles and caches fonts from.
pub const DEFAULT_TARGET: &str = "src/assets/fonts/open-sans";
/// Web font suffixes accepted when no extensions are configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["woff", "woff2"];

/// Everything a [`FontCopier`](crate::copier::FontCopier) needs for one run.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Accepted file-name suffixes, stored without the leading dot.
    pub extensions: Vec<String>,
    /// When non-empty, a file must match at least one pattern to be copied.
    pub name_patterns: Vec<Regex>,
    /// Worker threads for the copy loop; `None` uses the global rayon pool.
    pub jobs: Option<usize>,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            target: PathBuf::from(DEFAULT_TARGET),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            name_patterns: Vec::new(),
            jobs: None,
        }
    }
}

impl CopyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn with_name_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.name_patterns = patterns;
        self
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }
}

/// Normalize raw extension arguments (`woff`, `.woff2`) into bare suffixes.
pub fn parse_extension_list(raw: &[String]) -> Result<Vec<String>> {
    let mut extensions = Vec::with_capacity(raw.len());
    for item in raw {
        let ext = item.trim().trim_start_matches('.');
        if ext.is_empty() {
            return Err(anyhow!("empty file extension in {raw:?}"));
        }
        if ext.contains(['/', '\\']) {
            return Err(anyhow!("file extension must not contain a path separator: {ext}"));
        }
        extensions.push(ext.to_string());
    }

    if extensions.is_empty() {
        return Err(anyhow!("at least one file extension is required"));
    }

    extensions.dedup();
    Ok(extensions)
}
