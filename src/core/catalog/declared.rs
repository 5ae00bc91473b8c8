use std::{collections::HashSet, fs, path::Path};

use super::{IconRecord, builder::derive_record};
use crate::core::categories::CategoryIndex;

/// Records for every icon a category declares, checked against the disk.
///
/// The first category claiming a path keeps it, so ids stay unique.
pub(super) fn declared_records(index: &CategoryIndex, icons_root: &Path) -> Vec<IconRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for entry in index.entries() {
        let folder = entry.target_folder();
        for icon in &entry.icons {
            let relative_path = format!("{}/{}", folder, icon);
            if !seen.insert(relative_path.clone()) {
                continue;
            }

            let metadata = fs::metadata(icons_root.join(&relative_path))
                .ok()
                .filter(|m| m.is_file());
            let exists = metadata.is_some();
            let size_bytes = metadata.map(|m| m.len()).unwrap_or(0);

            let mut record = derive_record(&relative_path, size_bytes, Some(entry));
            record.folder = Some(folder.clone());
            record.exists = Some(exists);
            records.push(record);
        }
    }

    records
}
