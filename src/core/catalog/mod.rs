//! Catalog assembly: icon records, category aggregates and the two output
//! documents.
//!
//! Two generation modes share the per-file derivation:
//!
//! - **scan**: the filesystem walk decides which icons exist, the category
//!   declaration only overlays metadata by file name.
//! - **declared**: each category's icon list decides which icons exist, under
//!   the category folder, and presence on disk is recorded as `exists`.

mod aggregate;
mod builder;
mod declared;
mod writer;

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    core::{categories::CategoryIndex, classify::Style, file_scanner::ensure_icon_root},
    error::Result,
};

pub use aggregate::aggregate_categories;
pub use builder::derive_record;
pub use writer::{CATALOG_FILE_NAME, CATEGORIES_FILE_NAME, OutputPaths, write_json, write_outputs};

/// Format version stamped into both documents.
pub const CATALOG_VERSION: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Walk the icon root; the declaration is a metadata overlay.
    #[default]
    Scan,
    /// Follow the declared icon lists and record which files exist.
    Declared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub file_name: String,
    pub extension: String,
    pub category: String,
    pub description: String,
    pub library: String,
    pub collection: String,
    pub ui_set: Option<String>,
    pub is_new: bool,
    pub path: String,
    pub size_bytes: u64,
    pub tags: Vec<String>,
    pub source: String,
    pub license: String,
    pub brand_owner: String,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
}

impl IconRecord {
    /// Aggregation key `collection::category`.
    pub fn category_key(&self) -> String {
        format!("{}::{}", self.collection, self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub id: String,
    pub name: String,
    pub library: String,
    pub collection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    pub icon_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_count: Option<usize>,
    pub ui_set: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOutput {
    pub version: u32,
    pub generated_at: String,
    pub source: String,
    pub total_icons: usize,
    pub icons: Vec<IconRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub version: u32,
    pub generated_at: String,
    pub source: String,
    pub total_categories: usize,
    pub categories: Vec<CategoryAggregate>,
}

/// Inputs for one catalog generation run.
#[derive(Debug, Clone)]
pub struct BuildOptions<'a> {
    pub icons_root: &'a Path,
    pub ignores: &'a [String],
    pub mode: BuildMode,
    /// Identifier of the category source, usually its file name.
    pub source_name: String,
    pub generated_at: String,
    pub verbose: bool,
}

/// Both documents of a run plus counters for the summary line.
#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub catalog: CatalogOutput,
    pub categories: CategoryOutput,
    /// Paths the walk could not read.
    pub skipped_count: usize,
    /// Declared icons absent from disk (declared mode only).
    pub missing_count: usize,
}

/// RFC 3339 UTC timestamp with millisecond precision.
pub fn generation_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate both documents for the given category overlay.
///
/// Fails when the icon root is missing, before anything is produced.
pub fn build_catalog(index: &CategoryIndex, options: &BuildOptions) -> Result<CatalogBuild> {
    let (mut icons, skipped_count) = match options.mode {
        BuildMode::Scan => builder::scan_records(index, options)?,
        BuildMode::Declared => {
            ensure_icon_root(options.icons_root)?;
            (declared::declared_records(index, options.icons_root), 0)
        }
    };

    icons.sort_by(|a, b| a.path.cmp(&b.path));
    let missing_count = icons
        .iter()
        .filter(|icon| icon.exists == Some(false))
        .count();
    let categories = aggregate_categories(&icons);

    Ok(CatalogBuild {
        catalog: CatalogOutput {
            version: CATALOG_VERSION,
            generated_at: options.generated_at.clone(),
            source: options.source_name.clone(),
            total_icons: icons.len(),
            icons,
        },
        categories: CategoryOutput {
            version: CATALOG_VERSION,
            generated_at: options.generated_at.clone(),
            source: options.source_name.clone(),
            total_categories: categories.len(),
            categories,
        },
        skipped_count,
        missing_count,
    })
}
