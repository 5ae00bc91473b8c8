use std::collections::HashMap;

use super::{CategoryAggregate, IconRecord};
use crate::utils::slugify;

/// Group icons by `collection::category`.
///
/// The first record of a group provides its metadata, so callers pass records
/// already sorted by path. Declared-mode records (those carrying a `folder`)
/// also fill `folder`, `isNew` and `existingCount`.
pub fn aggregate_categories(icons: &[IconRecord]) -> Vec<CategoryAggregate> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut aggregates: Vec<CategoryAggregate> = Vec::new();

    for icon in icons {
        let key = icon.category_key();
        let idx = *positions.entry(key.clone()).or_insert_with(|| {
            aggregates.push(CategoryAggregate {
                id: slugify(&key),
                name: icon.category.clone(),
                library: icon.library.clone(),
                collection: icon.collection.clone(),
                folder: icon.folder.clone(),
                description: icon.description.clone(),
                is_new: icon.folder.as_ref().map(|_| icon.is_new),
                icon_count: 0,
                existing_count: icon.exists.map(|_| 0),
                ui_set: icon.ui_set.clone(),
            });
            aggregates.len() - 1
        });

        let aggregate = &mut aggregates[idx];
        aggregate.icon_count += 1;
        if icon.exists == Some(true)
            && let Some(count) = aggregate.existing_count.as_mut()
        {
            *count += 1;
        }
    }

    aggregates.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.collection.cmp(&b.collection))
    });
    aggregates
}
