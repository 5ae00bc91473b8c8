use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::CatalogBuild;

pub const CATALOG_FILE_NAME: &str = "catalog.json";
pub const CATEGORIES_FILE_NAME: &str = "categories.json";

/// Where a run wrote its documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub catalog: PathBuf,
    pub categories: PathBuf,
}

/// Save a value as pretty JSON.
///
/// Uses 2-space indentation and adds a trailing newline. Parent directories
/// are created as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

/// Write `catalog.json` and `categories.json` into `output_dir`.
pub fn write_outputs(output_dir: &Path, build: &CatalogBuild) -> Result<OutputPaths> {
    let paths = OutputPaths {
        catalog: output_dir.join(CATALOG_FILE_NAME),
        categories: output_dir.join(CATEGORIES_FILE_NAME),
    };
    write_json(&paths.catalog, &build.catalog)?;
    write_json(&paths.categories, &build.categories)?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_json_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_json(&path, &json!({ "b": 1, "a": [true] })).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}\n");
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();

        write_json(&path, &json!({ "fresh": true })).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, json!({ "fresh": true }));
    }
}
