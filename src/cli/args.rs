//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Generate `catalog.json` and `categories.json`
//! - `reorg`: Move legacy flat icons into the sharded layout
//! - `search`: Filter and page through a generated catalog
//! - `init`: Initialize the glyphs configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::BuildMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Reorg(cmd)) => cmd.common.verbose,
            Some(Command::Search(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Category source file (overrides GLYPHS_SOURCE and config file)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Icon root directory (overrides config file)
    #[arg(long)]
    pub icons_root: Option<PathBuf>,

    /// Output directory for the generated documents (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generation mode (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<BuildMode>,
}

#[derive(Debug, Args)]
pub struct ReorgCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the intended moves without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Search terms; every term must match
    pub query: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Only icons of this collection
    #[arg(long)]
    pub collection: Option<String>,

    /// Only icons of this category
    #[arg(long)]
    pub category: Option<String>,

    /// Allowed file extensions (default: svg and png)
    /// Can be specified multiple times: --ext svg --ext webp
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the icon catalog and category index
    Build(BuildCommand),
    /// Move icons from the legacy flat folder into the sharded layout
    Reorg(ReorgCommand),
    /// Search the generated catalog
    Search(SearchCommand),
    /// Initialize a new .glyphsrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args() {
        let args =
            Arguments::try_parse_from(["glyphs", "build", "--mode", "declared", "-v"]).unwrap();
        match args.command {
            Some(Command::Build(cmd)) => {
                assert_eq!(cmd.mode, Some(BuildMode::Declared));
                assert!(cmd.common.verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_args() {
        let args = Arguments::try_parse_from([
            "glyphs", "search", "arrow", "up", "--ext", "svg", "--page", "2",
        ])
        .unwrap();
        match args.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.query, vec!["arrow", "up"]);
                assert_eq!(cmd.extensions, vec!["svg"]);
                assert_eq!(cmd.page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_page_zero_is_rejected() {
        assert!(Arguments::try_parse_from(["glyphs", "search", "--page", "0"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Arguments::try_parse_from(["glyphs", "build", "--mode", "magic"]).is_err());
    }
}
