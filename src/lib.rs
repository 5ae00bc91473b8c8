//! Glyphs - icon catalog builder
//!
//! Glyphs walks an icon library, overlays category metadata declared as an
//! object literal inside a UI source file, and writes a searchable
//! `catalog.json` plus a `categories.json` index. It also migrates a legacy
//! flat icon folder into a sharded layout and offers a search view over the
//! generated catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog engine (extraction, classification, assembly, reorg, gallery)
//! - `error`: Typed errors that abort a catalog run
//! - `utils`: Shared text utilities

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
