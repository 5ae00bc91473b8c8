use std::{cmp::Ordering, collections::BTreeSet, sync::Arc};

use super::document::{CatalogDocument, CategoriesDocument, CategorySummary, GalleryIcon, enrich_icons};

/// Icons shown per page.
pub const PAGE_SIZE: usize = 180;

/// Extensions shown when no extension filter is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["svg", "png"];

pub const NO_MATCH_STATUS: &str = "No icons match the current filters.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// Whitespace-separated terms; every term must occur in an icon's haystack.
    pub search: String,
    /// `None` means all collections.
    pub collection: Option<String>,
    /// `None` means all categories.
    pub category: Option<String>,
    pub extensions: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: String::new(),
            collection: None,
            category: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Filters {
    fn tokens(&self) -> Vec<String> {
        self.search
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn matches(&self, icon: &GalleryIcon, tokens: &[String]) -> bool {
        if let Some(collection) = &self.collection
            && &icon.icon.collection != collection
        {
            return false;
        }
        if let Some(category) = &self.category
            && &icon.icon.category != category
        {
            return false;
        }
        if !self.extensions.iter().any(|ext| ext == &icon.icon.extension) {
            return false;
        }
        tokens.iter().all(|token| icon.search.contains(token.as_str()))
    }
}

/// Loaded gallery data plus the active filters.
///
/// Changing filters yields a new state; the icon data is shared between them.
#[derive(Debug, Clone)]
pub struct GalleryState {
    icons: Arc<Vec<GalleryIcon>>,
    categories: Arc<Vec<CategorySummary>>,
    filters: Filters,
    matches: Vec<usize>,
}

fn by_name(a: &GalleryIcon, b: &GalleryIcon) -> Ordering {
    a.icon
        .name
        .to_lowercase()
        .cmp(&b.icon.name.to_lowercase())
        .then_with(|| a.icon.name.cmp(&b.icon.name))
}

impl GalleryState {
    pub fn new(catalog: CatalogDocument, categories: CategoriesDocument) -> Self {
        let mut icons = enrich_icons(catalog.icons);
        icons.sort_by(by_name);

        let mut categories = categories.categories;
        categories.sort_by(|a, b| {
            a.collection
                .cmp(&b.collection)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });

        let state = Self {
            icons: Arc::new(icons),
            categories: Arc::new(categories),
            filters: Filters::default(),
            matches: Vec::new(),
        };
        state.with_filters(Filters::default())
    }

    pub fn with_filters(&self, filters: Filters) -> Self {
        let tokens = filters.tokens();
        let matches = self
            .icons
            .iter()
            .enumerate()
            .filter(|(_, icon)| filters.matches(icon, &tokens))
            .map(|(idx, _)| idx)
            .collect();
        Self {
            icons: Arc::clone(&self.icons),
            categories: Arc::clone(&self.categories),
            filters,
            matches,
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn total(&self) -> usize {
        self.icons.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.matches.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &GalleryIcon> {
        self.matches.iter().map(|&idx| &self.icons[idx])
    }

    /// Icons on the zero-based `page`; empty past the end.
    pub fn page(&self, page: usize) -> Vec<&GalleryIcon> {
        self.filtered()
            .skip(page.saturating_mul(PAGE_SIZE))
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.matches.len().div_ceil(PAGE_SIZE)
    }

    pub fn has_more(&self, page: usize) -> bool {
        (page + 1).saturating_mul(PAGE_SIZE) < self.matches.len()
    }

    /// Distinct collections of the loaded icons, sorted.
    pub fn collections(&self) -> Vec<&str> {
        self.icons
            .iter()
            .map(|icon| icon.icon.collection.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Category list ordered by collection, then name.
    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    pub fn status(&self) -> Option<&'static str> {
        self.matches.is_empty().then_some(NO_MATCH_STATUS)
    }
}
