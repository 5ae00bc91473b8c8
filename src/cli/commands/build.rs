use anyhow::Result;

use super::super::args::BuildCommand;
use super::{BuildSummary, CommandResult, CommandSummary};
use crate::core::{
    BuildOptions, ProjectContext, build_catalog,
    catalog::{generation_timestamp, write_outputs},
};

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let mode = cmd.mode.unwrap_or(ctx.config.mode);
    let categories = ctx.load_categories()?;

    let options = BuildOptions {
        icons_root: &ctx.icons_root,
        ignores: &ctx.config.ignores,
        mode,
        source_name: categories.source_name(),
        generated_at: generation_timestamp(),
        verbose: ctx.verbose,
    };
    let build = build_catalog(&categories.index, &options)?;
    let outputs = write_outputs(&ctx.output_dir, &build)?;

    Ok(CommandResult::new(CommandSummary::Build(BuildSummary {
        mode,
        source: ctx.display_path(&categories.source_path),
        icon_count: build.catalog.total_icons,
        category_count: build.categories.total_categories,
        outputs,
        collisions: categories.index.collisions().to_vec(),
        skipped_count: build.skipped_count,
        missing_count: build.missing_count,
    })))
}
