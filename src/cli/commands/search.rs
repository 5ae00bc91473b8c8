use anyhow::Result;

use super::super::args::SearchCommand;
use super::{CommandResult, CommandSummary, SearchSummary};
use crate::core::{
    ProjectContext,
    gallery::{DEFAULT_EXTENSIONS, Filters, load_gallery},
};

fn filters_from(cmd: &SearchCommand) -> Filters {
    let extensions = if cmd.extensions.is_empty() {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        cmd.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect()
    };
    Filters {
        search: cmd.query.join(" "),
        collection: cmd.collection.clone(),
        category: cmd.category.clone(),
        extensions,
    }
}

pub fn search(cmd: SearchCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let summary = match load_gallery(&ctx.output_dir) {
        Ok(state) => SearchSummary::Results {
            state: state.with_filters(filters_from(&cmd)),
            page: usize::try_from(cmd.page.saturating_sub(1)).unwrap_or(usize::MAX),
        },
        Err(err) => SearchSummary::LoadFailed {
            reason: format!("{:#}", err),
        },
    };

    Ok(CommandResult::new(CommandSummary::Search(summary)))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::args::{Arguments, Command};

    fn parse(args: &[&str]) -> SearchCommand {
        let mut argv = vec!["glyphs", "search"];
        argv.extend_from_slice(args);
        match Arguments::try_parse_from(argv).unwrap().command {
            Some(Command::Search(cmd)) => cmd,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_filters() {
        let filters = filters_from(&parse(&[]));
        assert_eq!(filters, Filters::default());
    }

    #[test]
    fn test_filters_from_args() {
        let filters = filters_from(&parse(&[
            "cloud", "vm", "--collection", "azure", "--ext", ".SVG", "--ext", "webp",
        ]));
        assert_eq!(filters.search, "cloud vm");
        assert_eq!(filters.collection.as_deref(), Some("azure"));
        assert_eq!(filters.category, None);
        assert_eq!(filters.extensions, vec!["svg", "webp"]);
    }
}
