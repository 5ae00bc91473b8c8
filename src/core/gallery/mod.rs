//! Read-only browsing model over a generated catalog.
//!
//! Loads `catalog.json` and `categories.json`, enriches icons with size-variant
//! families and a search haystack, and filters them through an immutable
//! [`GalleryState`].

mod document;
mod state;

use std::path::Path;

use anyhow::Result;

use crate::{core::classify::collection_label, utils::to_title};

pub use document::{
    CatalogDocument, CatalogIcon, CategoriesDocument, CategorySummary, GalleryIcon, enrich_icons,
    load_documents,
};
pub use state::{DEFAULT_EXTENSIONS, Filters, GalleryState, NO_MATCH_STATUS, PAGE_SIZE};

pub const LOAD_FAILURE_STATUS: &str =
    "Failed to load metadata. Run `glyphs build` first to generate catalog.json and categories.json.";

/// Load the documents in `output_dir` into a state with default filters.
pub fn load_gallery(output_dir: &Path) -> Result<GalleryState> {
    let (catalog, categories) = load_documents(output_dir)?;
    Ok(GalleryState::new(catalog, categories))
}

/// Human label for a collection directory name.
pub fn display_collection(collection: &str) -> String {
    match collection_label(collection) {
        Some(label) => label.to_string(),
        None => to_title(&collection.replace('-', " ")),
    }
}

/// `0 B`, `512 B`, `1.5 KB`, `12 MB`: one decimal below ten.
pub fn format_bytes(value: u64) -> String {
    if value == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 3] = ["B", "KB", "MB"];
    let mut size = value as f64;
    let mut idx = 0;
    while size >= 1024.0 && idx < UNITS.len() - 1 {
        size /= 1024.0;
        idx += 1;
    }
    if size < 10.0 {
        format!("{:.1} {}", size, UNITS[idx])
    } else {
        format!("{:.0} {}", size, UNITS[idx])
    }
}
