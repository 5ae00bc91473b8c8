//! One-time migration of the legacy flat icon folder into the sharded layout.
//!
//! Each regular file directly inside the legacy folder is routed, in order:
//!
//! 1. declared in a category: `<category folder>/<file>`
//! 2. name starts with `sap`: `sap/legacy/<file>`
//! 3. icon-font prefix: `ui/<family>[/<variant>]/<shard>/<file>`
//! 4. anything else: `uncategorized/<shard 1>/<shard 2>/<file>`
//!
//! Existing destinations are never overwritten.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::core::{
    categories::CategoryIndex,
    classify::{FALLBACK_COLLECTION, UI_COLLECTION, shard, ui_family},
};

const SAP_PREFIX: &str = "sap";
const SAP_LEGACY_DIR: [&str; 2] = ["sap", "legacy"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub file_name: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct ReorgOptions<'a> {
    pub icons_root: &'a Path,
    pub legacy_dir: &'a Path,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct ReorgSummary {
    /// Files moved, or that would be moved in a dry run.
    pub moved: Vec<PlannedMove>,
    /// Files left in place because the destination already exists.
    pub skipped: Vec<PlannedMove>,
    /// Regular files still in the legacy folder afterwards.
    pub remaining: usize,
    pub legacy_removed: bool,
}

/// Destination directory, relative to the icon root, for a legacy file.
pub fn destination_dir(file_name: &str, index: &CategoryIndex) -> Vec<String> {
    if let Some(entry) = index.lookup(file_name) {
        return entry
            .target_folder()
            .split('/')
            .map(str::to_string)
            .collect();
    }

    let starts_with_sap = file_name
        .get(..SAP_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(SAP_PREFIX));
    if starts_with_sap {
        return SAP_LEGACY_DIR.iter().map(|s| s.to_string()).collect();
    }

    if let Some(family) = ui_family(file_name) {
        let mut segments = vec![UI_COLLECTION.to_string()];
        segments.extend(family.destination(file_name));
        return segments;
    }

    vec![
        FALLBACK_COLLECTION.to_string(),
        shard(file_name, 1),
        shard(file_name, 2),
    ]
}

/// Regular files directly inside `dir`, sorted by name.
fn legacy_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entry.file_type().is_ok_and(|t| t.is_file()) {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    Ok(files)
}

/// Every move the reorganizer would attempt, in file-name order.
pub fn plan_moves(index: &CategoryIndex, options: &ReorgOptions) -> Result<Vec<PlannedMove>> {
    let files = legacy_files(options.legacy_dir)?;
    Ok(files
        .into_iter()
        .map(|file_name| {
            let mut to = options.icons_root.to_path_buf();
            to.extend(destination_dir(&file_name, index));
            to.push(&file_name);
            PlannedMove {
                from: options.legacy_dir.join(&file_name),
                to,
                file_name,
            }
        })
        .collect())
}

/// Move the legacy files and remove the legacy folder once it is empty.
///
/// A dry run only plans: nothing is created, moved or removed.
pub fn reorganize(index: &CategoryIndex, options: &ReorgOptions) -> Result<ReorgSummary> {
    if !options.legacy_dir.is_dir() {
        bail!("Legacy folder not found: {}", options.legacy_dir.display());
    }

    let mut summary = ReorgSummary::default();
    for planned in plan_moves(index, options)? {
        if planned.to.exists() {
            summary.skipped.push(planned);
            continue;
        }
        if !options.dry_run {
            if let Some(parent) = planned.to.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::rename(&planned.from, &planned.to).with_context(|| {
                format!(
                    "Failed to move {} to {}",
                    planned.from.display(),
                    planned.to.display()
                )
            })?;
        }
        summary.moved.push(planned);
    }

    summary.remaining = legacy_files(options.legacy_dir)?.len();
    if summary.remaining == 0 && !options.dry_run {
        fs::remove_dir_all(options.legacy_dir).with_context(|| {
            format!("Failed to remove directory: {}", options.legacy_dir.display())
        })?;
        summary.legacy_removed = true;
    }

    Ok(summary)
}
