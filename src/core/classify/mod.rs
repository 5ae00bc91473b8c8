//! Pure per-file classifiers.
//!
//! - `style`: flat / filled / line / color inference
//! - `meta`: provenance (source, license, brand owner) tables
//! - `family`: size-variant grouping (`icon_24.svg` + `icon_48.svg`)
//! - `shard`: icon-font prefix recognition and shard buckets

pub mod family;
pub mod meta;
pub mod shard;
pub mod style;

pub use family::{KNOWN_SIZES, family_key, size_variant};
pub use meta::{Provenance, collection_label, resolve_provenance};
pub use shard::{UiFamily, shard, ui_family};
pub use style::{Style, infer_style};

/// Collection holding generic UI icon sets (`ui/<set>/...`).
pub const UI_COLLECTION: &str = "ui";

/// Collection used when a path has no usable first segment.
pub const FALLBACK_COLLECTION: &str = "uncategorized";
