//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow glyphs to be used as a library. Results
//! go to stdout, warnings to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BuildSummary, CommandResult, CommandSummary, InitSummary, ReorgReport, SearchSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    BuildMode, Collision,
    gallery::{
        GalleryIcon, GalleryState, LOAD_FAILURE_STATUS, PAGE_SIZE, display_collection, format_bytes,
    },
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err);
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, out, err),
        CommandSummary::Reorg(report) => print_reorg(report, verbose, out, err),
        CommandSummary::Search(summary) => print_search(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn warning_prefix() -> colored::ColoredString {
    "warning:".bold().yellow()
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

// ============================================================
// build
// ============================================================

fn print_build<W: Write, E: Write>(summary: &BuildSummary, verbose: bool, out: &mut W, err: &mut E) {
    print_collisions(&summary.collisions, verbose, err);

    if summary.skipped_count > 0 {
        let _ = writeln!(
            err,
            "{} {} skipped due to access errors{}",
            warning_prefix(),
            plural(summary.skipped_count, "path", "paths"),
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    if summary.mode == BuildMode::Declared && summary.missing_count > 0 {
        let _ = writeln!(
            err,
            "{} {} declared but not found on disk",
            warning_prefix(),
            plural(summary.missing_count, "icon", "icons"),
        );
    }

    let _ = writeln!(
        out,
        "{}",
        format!(
            "Generated {} icon entries across {} categories.",
            summary.icon_count, summary.category_count
        )
        .green()
    );
    if verbose {
        let _ = writeln!(out, "  source:     {}", summary.source);
        let _ = writeln!(out, "  catalog:    {}", summary.outputs.catalog.display());
        let _ = writeln!(out, "  categories: {}", summary.outputs.categories.display());
    }
}

fn print_collisions<E: Write>(collisions: &[Collision], verbose: bool, err: &mut E) {
    if collisions.is_empty() {
        return;
    }
    if !verbose {
        let _ = writeln!(
            err,
            "{} {} listed by more than one category (use {} for details)",
            warning_prefix(),
            plural(collisions.len(), "file name", "file names"),
            "-v".cyan()
        );
        return;
    }
    for collision in collisions {
        let _ = writeln!(
            err,
            "{} \"{}\" is listed by \"{}\" and \"{}\"; keeping \"{}\"",
            warning_prefix(),
            collision.file_name,
            collision.kept,
            collision.ignored,
            collision.kept
        );
    }
}

// ============================================================
// reorg
// ============================================================

fn print_reorg<W: Write, E: Write>(report: &ReorgReport, verbose: bool, out: &mut W, err: &mut E) {
    for planned in &report.moved {
        if report.is_dry_run {
            let _ = writeln!(out, "[dry-run] {} -> {}", planned.from, planned.to);
        } else if verbose {
            let _ = writeln!(out, "{} {} -> {}", "moved".dimmed(), planned.from, planned.to);
        }
    }

    for planned in &report.skipped {
        if verbose {
            let _ = writeln!(
                err,
                "{} {} already exists, leaving {} in place",
                warning_prefix(),
                planned.to,
                planned.from
            );
        }
    }
    if !report.skipped.is_empty() && !verbose {
        let _ = writeln!(
            err,
            "{} {} skipped because the destination exists (use {} for details)",
            warning_prefix(),
            plural(report.skipped.len(), "file", "files"),
            "-v".cyan()
        );
    }

    if report.is_dry_run {
        let _ = writeln!(
            out,
            "{} {} from {}.",
            "Would move".yellow().bold(),
            plural(report.moved.len(), "file", "files"),
            report.legacy_dir
        );
        let _ = writeln!(out, "Run without {} to move these files.", "--dry-run".cyan());
        return;
    }

    let _ = writeln!(
        out,
        "{} {} ({} skipped). Remaining legacy files: {}",
        "Moved".green().bold(),
        plural(report.moved.len(), "file", "files"),
        report.skipped.len(),
        report.remaining
    );
    if report.legacy_removed {
        let _ = writeln!(out, "Removed empty legacy folder {}", report.legacy_dir);
    }
}

// ============================================================
// search
// ============================================================

fn print_search<W: Write, E: Write>(summary: &SearchSummary, verbose: bool, out: &mut W, err: &mut E) {
    match summary {
        SearchSummary::LoadFailed { reason } => {
            let _ = writeln!(err, "{} {}", FAILURE_MARK.red(), LOAD_FAILURE_STATUS);
            if verbose {
                let _ = writeln!(err, "  {} {}", "=".blue(), reason);
            }
        }
        SearchSummary::Results { state, page } => print_results(state, *page, out),
    }
}

fn print_results<W: Write>(state: &GalleryState, page: usize, out: &mut W) {
    if let Some(status) = state.status() {
        let _ = writeln!(out, "{}", status);
        let _ = writeln!(out, "{} icons in catalog", state.total());
        return;
    }

    let icons = state.page(page);
    if icons.is_empty() {
        let _ = writeln!(
            out,
            "Page {} is past the end ({} for {} matching icons).",
            page + 1,
            plural(state.page_count(), "page", "pages"),
            state.filtered_count()
        );
        return;
    }

    let title_width = icons
        .iter()
        .map(|icon| UnicodeWidthStr::width(icon.display_title()))
        .max()
        .unwrap_or(0);
    for icon in &icons {
        print_icon(icon, title_width, out);
    }

    let start = page * PAGE_SIZE + 1;
    let end = start + icons.len() - 1;
    let _ = writeln!(
        out,
        "\nShowing {}-{} of {} matching icons ({} in catalog)",
        start,
        end,
        state.filtered_count(),
        state.total()
    );
    if state.has_more(page) {
        let _ = writeln!(out, "Use {} for more.", format!("--page {}", page + 2).cyan());
    }
}

fn print_icon<W: Write>(icon: &GalleryIcon, title_width: usize, out: &mut W) {
    let title = icon.display_title();
    let padding = title_width.saturating_sub(UnicodeWidthStr::width(title));
    let category = if icon.icon.category.is_empty() {
        "Uncategorized"
    } else {
        icon.icon.category.as_str()
    };

    let mut details = vec![
        format!("{} / {}", display_collection(&icon.icon.collection), category),
        format_bytes(icon.icon.size_bytes),
    ];
    details.extend(icon.size_label());
    details.extend(icon.variant_label());
    if icon.icon.is_new {
        details.push("new".to_string());
    }

    let _ = writeln!(
        out,
        "{}{:padding$}  {}  {}",
        title.bold(),
        "",
        icon.icon.path.dimmed(),
        details.join(" | "),
        padding = padding
    );
}

// ============================================================
// init
// ============================================================

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Tests
// ============================================================
