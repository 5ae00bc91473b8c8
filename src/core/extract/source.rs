use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Environment variable that overrides the configured source candidates.
pub const SOURCE_ENV_VAR: &str = "GLYPHS_SOURCE";

/// Pick the first existing category source file.
///
/// Priority: explicit `--source` path, then the `GLYPHS_SOURCE` value, then the
/// configured candidates in order. An explicit path is never silently replaced
/// by a fallback.
pub fn resolve_source_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    candidates: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(CatalogError::SourceNotFound {
            checked: vec![path.to_path_buf()],
            env_var: SOURCE_ENV_VAR,
        });
    }

    let checked: Vec<PathBuf> = env_value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .into_iter()
        .chain(candidates.iter().cloned())
        .collect();

    match checked.iter().find(|candidate| candidate.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(CatalogError::SourceNotFound {
            checked,
            env_var: SOURCE_ENV_VAR,
        }),
    }
}
