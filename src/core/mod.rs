//! Catalog engine.
//!
//! - `context`: config, CLI overrides and path resolution for a run
//! - `extract`: locate and parse the category declaration in a source file
//! - `categories`: category overlay and file-name lookup
//! - `file_scanner`: walk the icon root
//! - `classify`: pure per-file classifiers
//! - `catalog`: record derivation, aggregation and output documents
//! - `reorg`: legacy folder migration
//! - `gallery`: filtering and paging over generated documents

pub mod catalog;
pub mod categories;
pub mod classify;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod gallery;
pub mod reorg;

pub use catalog::{BuildMode, BuildOptions, CatalogBuild, build_catalog};
pub use categories::{CategoryEntry, CategoryIndex, Collision};
pub use context::{LoadedCategories, ProjectContext};
