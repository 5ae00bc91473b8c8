use anyhow::Result;

use super::super::args::ReorgCommand;
use super::{CommandResult, CommandSummary, ReorgReport};
use crate::core::{
    ProjectContext,
    reorg::{ReorgOptions, reorganize},
};

pub fn reorg(cmd: ReorgCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let categories = ctx.load_categories()?;

    let options = ReorgOptions {
        icons_root: &ctx.icons_root,
        legacy_dir: &ctx.legacy_dir,
        dry_run: cmd.dry_run,
    };
    let summary = reorganize(&categories.index, &options)?;

    let report = ReorgReport::new(
        summary,
        ctx.display_path(&ctx.legacy_dir),
        cmd.dry_run,
        |path| ctx.display_path(path),
    );
    Ok(CommandResult::new(CommandSummary::Reorg(report)))
}
