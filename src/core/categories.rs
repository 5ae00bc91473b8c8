//! Category overlay parsed from the extracted declaration.
//!
//! The declaration maps category names to `{ description, library, isNew, icons }`.
//! It is untrusted, hand-maintained data, so every field degrades to a default
//! instead of failing the run.

use std::collections::HashMap;

use serde_json::Value;

use crate::core::extract::extract_literal;
use crate::error::Result;
use crate::utils::slugify;

pub const DEFAULT_LIBRARY: &str = "Uncategorized";

/// Library whose icons live in a single flat folder.
const FLAT_LIBRARY_SLUG: &str = "pideas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub description: String,
    pub library: String,
    pub is_new: bool,
    pub icons: Vec<String>,
    /// Explicit target folder, only meaningful in declared mode.
    pub folder: Option<String>,
}

impl CategoryEntry {
    fn from_value(name: &str, data: &Value) -> Self {
        let icons = match data.get("icons") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str())
                .filter(|item| is_plain_segment(item))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            name: name.to_string(),
            description: non_empty_str(data.get("description")).unwrap_or_default(),
            library: non_empty_str(data.get("library"))
                .unwrap_or_else(|| DEFAULT_LIBRARY.to_string()),
            is_new: data.get("isNew").is_some_and(is_truthy),
            icons,
            folder: non_empty_str(data.get("folder")),
        }
    }

    /// Folder (relative to the icon root) this category's icons are filed under.
    ///
    /// An explicit `folder` wins; otherwise `<library slug>/<category slug>`,
    /// except for the flat studio library.
    /// A `folder` that would leave the icon root (`..`, `.` or empty segments,
    /// backslashes) is ignored.
    pub fn target_folder(&self) -> String {
        if let Some(folder) = &self.folder {
            let trimmed = folder.trim_matches('/');
            if !trimmed.is_empty() && trimmed.split('/').all(is_plain_segment) {
                return trimmed.to_string();
            }
        }
        let library = slugify(&self.library);
        if library == FLAT_LIBRARY_SLUG {
            return library;
        }
        format!("{}/{}", library, slugify(&self.name))
    }
}

/// A single path component that stays where it is joined: no separators,
/// not `.` or `..`, not empty.
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', ':'])
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// JavaScript truthiness, as applied by `Boolean(value)`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse the declaration object into entries, in declaration order.
pub fn parse_categories(value: &Value) -> Vec<CategoryEntry> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(name, data)| CategoryEntry::from_value(name, data))
            .collect(),
        _ => Vec::new(),
    }
}

/// A file name listed by more than one category. The first category keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub file_name: String,
    pub kept: String,
    pub ignored: String,
}

/// Categories plus a file-name lookup where the first claiming category wins.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    entries: Vec<CategoryEntry>,
    by_file: HashMap<String, usize>,
    collisions: Vec<Collision>,
}

impl CategoryIndex {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        let mut by_file: HashMap<String, usize> = HashMap::new();
        let mut collisions = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            for icon in &entry.icons {
                match by_file.get(icon) {
                    None => {
                        by_file.insert(icon.clone(), idx);
                    }
                    Some(&kept) if kept != idx => collisions.push(Collision {
                        file_name: icon.clone(),
                        kept: entries[kept].name.clone(),
                        ignored: entry.name.clone(),
                    }),
                    Some(_) => {}
                }
            }
        }

        Self {
            entries,
            by_file,
            collisions,
        }
    }

    /// Extract the declaration after `marker` from `content` and index it.
    pub fn from_source(content: &str, marker: &str) -> Result<Self> {
        let value = extract_literal(content, marker)?;
        Ok(Self::new(parse_categories(&value)))
    }

    pub fn lookup(&self, file_name: &str) -> Option<&CategoryEntry> {
        self.by_file.get(file_name).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
