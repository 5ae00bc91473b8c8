use std::path::Path;

use crate::core::{
    BuildMode, Collision,
    catalog::OutputPaths,
    gallery::GalleryState,
    reorg::{PlannedMove, ReorgSummary},
};

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Reorg(ReorgReport),
    Search(SearchSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub mode: BuildMode,
    pub source: String,
    pub icon_count: usize,
    pub category_count: usize,
    pub outputs: OutputPaths,
    pub collisions: Vec<Collision>,
    /// Paths the walk could not read.
    pub skipped_count: usize,
    /// Declared icons absent from disk.
    pub missing_count: usize,
}

#[derive(Debug)]
pub struct ReorgReport {
    pub legacy_dir: String,
    pub is_dry_run: bool,
    pub moved: Vec<DisplayMove>,
    pub skipped: Vec<DisplayMove>,
    pub remaining: usize,
    pub legacy_removed: bool,
}

/// A planned move with paths already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMove {
    pub from: String,
    pub to: String,
}

impl ReorgReport {
    pub fn new(
        summary: ReorgSummary,
        legacy_dir: String,
        is_dry_run: bool,
        display: impl Fn(&Path) -> String,
    ) -> Self {
        let convert = |moves: Vec<PlannedMove>| -> Vec<DisplayMove> {
            moves
                .into_iter()
                .map(|m| DisplayMove {
                    from: display(m.from.as_path()),
                    to: display(m.to.as_path()),
                })
                .collect()
        };
        Self {
            legacy_dir,
            is_dry_run,
            moved: convert(summary.moved),
            skipped: convert(summary.skipped),
            remaining: summary.remaining,
            legacy_removed: summary.legacy_removed,
        }
    }
}

#[derive(Debug)]
pub enum SearchSummary {
    Results {
        state: GalleryState,
        /// Zero-based page index.
        page: usize,
    },
    /// The documents could not be loaded; carries the underlying error.
    LoadFailed { reason: String },
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running glyphs commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems that should turn the exit status into a failure.
    pub error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let error_count = match &summary {
            CommandSummary::Search(SearchSummary::LoadFailed { .. }) => 1,
            CommandSummary::Init(init) if !init.created => 1,
            _ => 0,
        };
        Self {
            summary,
            error_count,
        }
    }
}
