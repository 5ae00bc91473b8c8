use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a catalog run.
///
/// Per-file problems never show up here: missing category fields or odd file
/// names are recovered with defaults while the catalog is assembled.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(
        "Unable to locate the category source file (checked: {}). Set {env_var} to the file path.",
        join_paths(.checked)
    )]
    SourceNotFound {
        checked: Vec<PathBuf>,
        env_var: &'static str,
    },

    #[error("Icon root not found: {}", .path.display())]
    IconRootNotFound { path: PathBuf },

    #[error("Could not find `{marker}` in the category source")]
    MarkerNotFound { marker: String },

    #[error("Malformed literal at byte {offset}: {reason}")]
    MalformedInput { offset: usize, reason: String },
}

impl CatalogError {
    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            offset,
            reason: reason.into(),
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, CatalogError>;
