use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, de::DeserializeOwned};

use crate::core::{
    catalog::{CATALOG_FILE_NAME, CATEGORIES_FILE_NAME},
    classify::{family_key, size_variant},
};

/// An icon as read back from `catalog.json`.
///
/// Every field is optional on disk so documents from older builds, or from
/// either generation mode, still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogIcon {
    pub id: String,
    pub name: String,
    pub title: String,
    pub file_name: String,
    pub extension: String,
    pub category: String,
    pub description: String,
    pub library: String,
    pub collection: String,
    pub ui_set: Option<String>,
    pub is_new: bool,
    pub path: String,
    pub size_bytes: u64,
    pub tags: Vec<String>,
    pub source: String,
    pub license: String,
    pub brand_owner: String,
    pub style: String,
    pub folder: Option<String>,
    pub exists: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub library: String,
    pub collection: String,
    pub description: String,
    pub icon_count: usize,
    pub existing_count: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogDocument {
    pub generated_at: String,
    pub icons: Vec<CatalogIcon>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoriesDocument {
    pub generated_at: String,
    pub categories: Vec<CategorySummary>,
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Read both documents from a build output directory.
pub fn load_documents(output_dir: &Path) -> Result<(CatalogDocument, CategoriesDocument)> {
    let catalog = load_document(&output_dir.join(CATALOG_FILE_NAME))?;
    let categories = load_document(&output_dir.join(CATEGORIES_FILE_NAME))?;
    Ok((catalog, categories))
}

/// A catalog icon with the derived fields used for browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryIcon {
    pub icon: CatalogIcon,
    pub size_variant: Option<u32>,
    pub family_key: String,
    /// Lower-cased concatenation of every searchable field.
    pub search: String,
    /// Known sizes present in this icon's family, ascending.
    pub size_variants: Vec<u32>,
    pub family_count: usize,
}

impl GalleryIcon {
    fn grouping_key(&self) -> &str {
        [
            self.family_key.as_str(),
            self.icon.name.as_str(),
            self.icon.file_name.as_str(),
            self.icon.path.as_str(),
        ]
        .into_iter()
        .find(|key| !key.is_empty())
        .unwrap_or("")
    }

    pub fn display_title(&self) -> &str {
        if self.icon.title.is_empty() {
            &self.icon.name
        } else {
            &self.icon.title
        }
    }

    /// `Sizes: 24 / 48` for a multi-size family, `Size: 24` for a lone sized file.
    pub fn size_label(&self) -> Option<String> {
        if self.size_variants.len() > 1 {
            let sizes: Vec<String> = self.size_variants.iter().map(u32::to_string).collect();
            return Some(format!("Sizes: {}", sizes.join(" / ")));
        }
        self.size_variant.map(|size| format!("Size: {}", size))
    }

    pub fn variant_label(&self) -> Option<String> {
        (self.family_count > 1).then(|| format!("Variants: {}", self.family_count))
    }
}

fn search_haystack(icon: &CatalogIcon) -> String {
    let fields = [
        icon.title.as_str(),
        icon.name.as_str(),
        icon.file_name.as_str(),
        icon.category.as_str(),
        icon.collection.as_str(),
        icon.library.as_str(),
        icon.source.as_str(),
        icon.brand_owner.as_str(),
        icon.description.as_str(),
        icon.license.as_str(),
        icon.style.as_str(),
        icon.ui_set.as_deref().unwrap_or(""),
    ];
    fields
        .into_iter()
        .chain(icon.tags.iter().map(String::as_str))
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Attach size-variant and family information to every icon.
pub fn enrich_icons(icons: Vec<CatalogIcon>) -> Vec<GalleryIcon> {
    let mut enriched: Vec<GalleryIcon> = icons
        .into_iter()
        .map(|icon| {
            let file = if icon.file_name.is_empty() {
                icon.path.as_str()
            } else {
                icon.file_name.as_str()
            };
            GalleryIcon {
                size_variant: size_variant(file),
                family_key: family_key(file),
                search: search_haystack(&icon),
                size_variants: Vec::new(),
                family_count: 0,
                icon,
            }
        })
        .collect();

    let mut families: HashMap<String, (Vec<u32>, usize)> = HashMap::new();
    for icon in &enriched {
        let entry = families.entry(icon.grouping_key().to_string()).or_default();
        if let Some(size) = icon.size_variant
            && !entry.0.contains(&size)
        {
            entry.0.push(size);
        }
        entry.1 += 1;
    }

    for icon in &mut enriched {
        let (sizes, count) = families
            .get(icon.grouping_key())
            .cloned()
            .unwrap_or((Vec::new(), 1));
        icon.size_variants = sizes;
        icon.size_variants.sort_unstable();
        icon.family_count = count;
    }

    enriched
}
