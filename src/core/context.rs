use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        categories::CategoryIndex,
        extract::{SOURCE_ENV_VAR, resolve_source_path},
    },
};

/// Category declaration loaded from its source file.
pub struct LoadedCategories {
    pub source_path: PathBuf,
    pub index: CategoryIndex,
}

impl LoadedCategories {
    /// File name recorded as `source` in the output documents.
    pub fn source_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }
}

/// Paths and settings for one command run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--icons-root`)
/// 2. `GLYPHS_SOURCE` environment variable (source file only)
/// 3. `.glyphsrc.json` config file
/// 4. Built-in defaults
///
/// CLI paths are relative to the working directory, config paths to the
/// directory holding the config file.
pub struct ProjectContext {
    /// Config file contents, or defaults.
    pub config: Config,
    pub base_dir: PathBuf,
    pub icons_root: PathBuf,
    pub output_dir: PathBuf,
    pub legacy_dir: PathBuf,
    pub verbose: bool,
    source_override: Option<PathBuf>,
    source_candidates: Vec<PathBuf>,
}

impl ProjectContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the working directory")?;
        Self::from_dir(&cwd, common_args)
    }

    pub fn from_dir(start_dir: &Path, common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let loaded = load_config(start_dir)?;

        if verbose && !loaded.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let from_cli = |value: &Option<PathBuf>| value.as_ref().map(|p| start_dir.join(p));

        let icons_root =
            from_cli(&common_args.icons_root).unwrap_or_else(|| loaded.resolve(&loaded.config.icons_root));
        let output_dir =
            from_cli(&common_args.output_dir).unwrap_or_else(|| loaded.resolve(&loaded.config.output_dir));
        let legacy_dir = loaded.resolve(&loaded.config.legacy_dir);
        let source_candidates = loaded
            .config
            .source_candidates
            .iter()
            .map(|candidate| loaded.resolve(candidate))
            .collect();

        Ok(Self {
            source_override: from_cli(&common_args.source),
            source_candidates,
            icons_root,
            output_dir,
            legacy_dir,
            verbose,
            base_dir: loaded.base_dir,
            config: loaded.config,
        })
    }

    /// Resolve the category source file, reading the override variable.
    pub fn source_path(&self) -> Result<PathBuf> {
        let env_value = env::var(SOURCE_ENV_VAR).ok();
        self.source_path_with_env(env_value.as_deref())
    }

    pub fn source_path_with_env(&self, env_value: Option<&str>) -> Result<PathBuf> {
        Ok(resolve_source_path(
            self.source_override.as_deref(),
            env_value,
            &self.source_candidates,
        )?)
    }

    /// Locate, read and parse the category declaration.
    pub fn load_categories(&self) -> Result<LoadedCategories> {
        let source_path = self.source_path()?;
        let content = fs::read_to_string(&source_path)
            .with_context(|| format!("Failed to read file: {}", source_path.display()))?;
        let index = CategoryIndex::from_source(&content, &self.config.marker)
            .with_context(|| format!("Failed to extract categories from {}", source_path.display()))?;
        Ok(LoadedCategories { source_path, index })
    }

    /// Path shown to the user: relative to the project when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
