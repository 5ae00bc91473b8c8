use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::BuildMode;

pub const CONFIG_FILE_NAME: &str = ".glyphsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_icons_root")]
    pub icons_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_source_candidates")]
    pub source_candidates: Vec<String>,
    #[serde(default)]
    pub mode: BuildMode,
    #[serde(default = "default_legacy_dir")]
    pub legacy_dir: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_icons_root() -> String {
    "icons".to_string()
}

fn default_output_dir() -> String {
    "metadata".to_string()
}

fn default_marker() -> String {
    "const ALL_ICON_CATEGORIES".to_string()
}

fn default_source_candidates() -> Vec<String> {
    vec!["../pi-space/app/src/components/dashboard/ProLogoManagerWidget.jsx".to_string()]
}

fn default_legacy_dir() -> String {
    "icons/m365".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icons_root: default_icons_root(),
            output_dir: default_output_dir(),
            marker: default_marker(),
            source_candidates: default_source_candidates(),
            mode: BuildMode::default(),
            legacy_dir: default_legacy_dir(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores` and an empty `marker`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.marker.trim().is_empty() {
            anyhow::bail!("'marker' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative config paths resolve against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// Resolve a configured path against `base_dir`; absolute paths pass through.
    pub fn resolve(&self, value: impl AsRef<Path>) -> PathBuf {
        let value = value.as_ref();
        if value.is_absolute() {
            value.to_path_buf()
        } else {
            self.base_dir.join(value)
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
