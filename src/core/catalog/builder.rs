use std::collections::HashSet;

use rayon::prelude::*;

use super::{BuildOptions, IconRecord};
use crate::{
    core::{
        categories::{CategoryEntry, CategoryIndex},
        classify::{FALLBACK_COLLECTION, UI_COLLECTION, infer_style, resolve_provenance},
        file_scanner::scan_icon_files,
    },
    error::Result,
    utils::{to_title, to_tokens},
};

/// Split a file name into its base name and lower-cased extension.
fn split_extension(file_name: &str) -> (&str, String) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => (&file_name[..idx], file_name[idx + 1..].to_lowercase()),
        _ => (file_name, String::new()),
    }
}

/// Ordered, de-duplicated union of the tokens of every part.
fn collect_tags(parts: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    parts
        .iter()
        .flat_map(|part| to_tokens(part))
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Derive a full icon record from its relative path.
///
/// `category` is the overlay entry for this file, if any. Without one, the
/// category falls back to the humanized sub-directory (or collection) and the
/// library to the humanized collection.
pub fn derive_record(
    relative_path: &str,
    size_bytes: u64,
    category: Option<&CategoryEntry>,
) -> IconRecord {
    let segments: Vec<&str> = relative_path.split('/').collect();
    let collection = match segments.first() {
        Some(first) if segments.len() > 1 && !first.is_empty() => first.to_string(),
        _ => FALLBACK_COLLECTION.to_string(),
    };
    let file_name = segments.last().copied().unwrap_or(relative_path);
    let (name, extension) = split_extension(file_name);

    let ui_set = (collection == UI_COLLECTION && segments.len() > 2).then(|| segments[1].to_string());

    let (category_name, library, description, is_new) = match category {
        Some(entry) => (
            entry.name.clone(),
            entry.library.clone(),
            entry.description.clone(),
            entry.is_new,
        ),
        None => {
            let inferred = if segments.len() > 2 {
                to_title(segments[1])
            } else {
                to_title(&collection)
            };
            (inferred, to_title(&collection), String::new(), false)
        }
    };

    let provenance = resolve_provenance(&collection, ui_set.as_deref());
    let style = infer_style(file_name, &extension, &collection, ui_set.as_deref());

    let mut tag_parts = vec![name, category_name.as_str(), library.as_str(), collection.as_str()];
    if let Some(ui_set) = &ui_set {
        tag_parts.push(ui_set);
    }
    let tags = collect_tags(&tag_parts);

    IconRecord {
        id: relative_path.to_string(),
        name: name.to_string(),
        title: to_title(name),
        file_name: file_name.to_string(),
        extension,
        category: category_name,
        description,
        library,
        collection,
        ui_set,
        is_new,
        path: relative_path.to_string(),
        size_bytes,
        tags,
        source: provenance.source.to_string(),
        license: provenance.license.to_string(),
        brand_owner: provenance.brand_owner.to_string(),
        style,
        folder: None,
        exists: None,
    }
}

/// Records for every file found under the icon root, plus the skipped count.
pub(super) fn scan_records(
    index: &CategoryIndex,
    options: &BuildOptions,
) -> Result<(Vec<IconRecord>, usize)> {
    let scan = scan_icon_files(options.icons_root, options.ignores, options.verbose)?;

    // Each derivation only reads the index, so files are classified in parallel.
    let records: Vec<IconRecord> = scan
        .files
        .par_iter()
        .map(|file| {
            let file_name = file
                .relative_path
                .rsplit('/')
                .next()
                .unwrap_or(&file.relative_path);
            derive_record(&file.relative_path, file.size_bytes, index.lookup(file_name))
        })
        .collect();

    Ok((records, scan.skipped_count))
}
