//! Font discovery helpers for fontcopy-core (made by FontLab https://www.fontlab.com/)

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use walkdir::WalkDir;

use crate::config::DEFAULT_EXTENSIONS;

/// A font file sitting directly inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    /// Display form of the file name; also the name written to the target.
    pub name: String,
    pub path: PathBuf,
}

impl FontFile {
    /// Raw file name, preserved even when it is not valid UTF-8.
    pub fn file_name(&self) -> &OsStr {
        self.path
            .file_name()
            .unwrap_or_else(|| OsStr::new(&self.name))
    }
}

/// Trait for enumerating the fonts a run should copy.
pub trait FontDiscovery {
    fn discover(&self) -> Result<Vec<FontFile>>;
}

/// Single-level directory listing filtered by file-name suffix.
#[derive(Debug, Clone)]
pub struct DirDiscovery {
    root: PathBuf,
    extensions: Vec<String>,
    name_patterns: Vec<Regex>,
}

impl DirDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            name_patterns: Vec::new(),
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn with_name_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.name_patterns = patterns;
        self
    }

    fn accepts(&self, name: &str) -> bool {
        if !has_font_suffix(name, &self.extensions) {
            return false;
        }

        self.name_patterns.is_empty() || self.name_patterns.iter().any(|re| re.is_match(name))
    }
}

impl FontDiscovery for DirDiscovery {
    fn discover(&self) -> Result<Vec<FontFile>> {
        let meta = fs::metadata(&self.root)
            .with_context(|| format!("cannot read {}", self.root.display()))?;
        if !meta.is_dir() {
            return Err(anyhow!("not a directory: {}", self.root.display()));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("listing {}", self.root.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.accepts(&name) {
                found.push(FontFile {
                    name,
                    path: entry.into_path(),
                });
            }
        }

        Ok(found)
    }
}

/// Case-sensitive check that `name` ends with `.<ext>` for one of `extensions`.
pub fn has_font_suffix(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        name.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn web_exts() -> Vec<String> {
        vec!["woff".to_string(), "woff2".to_string()]
    }

    #[test]
    fn recognises_web_font_suffixes() {
        let exts = web_exts();
        assert!(has_font_suffix("OpenSans-Regular.woff", &exts));
        assert!(has_font_suffix("OpenSans-Regular.woff2", &exts));
        assert!(!has_font_suffix("OpenSans-Regular.WOFF", &exts));
        assert!(!has_font_suffix("OpenSans.ttf", &exts));
        assert!(!has_font_suffix("OpenSans-woff", &exts));
        assert!(!has_font_suffix("woff2", &exts));
    }

    #[test]
    fn lists_only_top_level_entries() {
        let tmp = tempdir().expect("tempdir");
        let nested = tmp.path().join("latin");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::write(nested.join("deep.woff2"), b"deep").expect("touch nested");
        let top = tmp.path().join("top.woff2");
        fs::write(&top, b"top").expect("touch top");

        let fonts = DirDiscovery::new(tmp.path()).discover().expect("discover");

        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].name, "top.woff2");
        assert_eq!(fonts[0].path, top);
    }

    #[test]
    fn name_patterns_narrow_the_listing() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("open-sans-latin-400-normal.woff2"), b"a").expect("touch");
        fs::write(tmp.path().join("open-sans-cyrillic-400-normal.woff2"), b"b").expect("touch");

        let fonts = DirDiscovery::new(tmp.path())
            .with_name_patterns(vec![Regex::new("-latin-").unwrap()])
            .discover()
            .expect("discover");

        let names: Vec<&str> = fonts.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["open-sans-latin-400-normal.woff2"]);
    }

    #[test]
    fn file_root_is_an_error() {
        let tmp = tempdir().expect("tempdir");
        let file = tmp.path().join("files");
        fs::write(&file, b"").expect("touch");

        let err = DirDiscovery::new(&file).discover().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
