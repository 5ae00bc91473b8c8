use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{CatalogError, Result};

/// A regular file found under the icon root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Slash-joined path relative to the icon root.
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub size_bytes: u64,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<ScannedFile>,
    pub skipped_count: usize,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Fail unless `root` is an existing directory.
pub fn ensure_icon_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(CatalogError::IconRootNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// Recursively collect every non-hidden regular file under `root`.
///
/// Files are returned in path order. `ignore_patterns` are glob patterns
/// matched against the slash-joined relative path. A missing root is an
/// error; unreadable entries below it are counted and skipped.
pub fn scan_icon_files(root: &Path, ignore_patterns: &[String], verbose: bool) -> Result<ScanResult> {
    ensure_icon_root(root)?;

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() || is_hidden(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let Some(relative_path) = relative_slash_path(root, entry.path()) else {
            continue;
        };

        if glob_patterns.iter().any(|p| p.matches(&relative_path)) {
            continue;
        }

        let size_bytes = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot stat file: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        files.push(ScannedFile {
            relative_path,
            absolute_path: entry.path().to_path_buf(),
            size_bytes,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(ScanResult {
        files,
        skipped_count,
    })
}
