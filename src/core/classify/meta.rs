//! Static provenance tables: who publishes a collection or UI set and under
//! which license.

/// Provenance attached to every icon record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    pub source: &'static str,
    pub license: &'static str,
    pub brand_owner: &'static str,
}

const fn provenance(
    source: &'static str,
    license: &'static str,
    brand_owner: &'static str,
) -> Provenance {
    Provenance {
        source,
        license,
        brand_owner,
    }
}

pub const UNKNOWN_PROVENANCE: Provenance = provenance("Unknown", "Unknown", "Unknown");

const COLLECTION_META: &[(&str, Provenance)] = &[
    ("microsoft-365", provenance("Microsoft", "Trademark", "Microsoft")),
    ("azure", provenance("Microsoft", "Trademark", "Microsoft")),
    ("security", provenance("Microsoft", "Trademark", "Microsoft")),
    ("sap", provenance("SAP", "Trademark", "SAP")),
    ("ai", provenance("Various", "Trademark", "Various")),
    ("third-party", provenance("Various", "Trademark", "Various")),
    ("ui", provenance("Various", "Varies", "Various")),
    ("pideas", provenance("PiDEAS Studio", "Proprietary", "PiDEAS Studio")),
    ("uncategorized", UNKNOWN_PROVENANCE),
];

const UI_META: &[(&str, Provenance)] = &[
    ("tabler", provenance("Tabler Icons", "MIT", "Tabler")),
    ("fontawesome", provenance("Font Awesome Free", "CC BY 4.0", "Fonticons")),
    ("mdi", provenance("Material Design Icons", "Apache-2.0", "Templarian")),
    ("lucide", provenance("Lucide", "ISC", "Lucide")),
    ("phosphor", provenance("Phosphor Icons", "MIT", "Phosphor")),
    ("cssgg", provenance("css.gg", "MIT", "css.gg")),
    ("heroicons", provenance("Heroicons", "MIT", "Tailwind Labs")),
    ("feather", provenance("Feather", "MIT", "Feather")),
    ("ionicons", provenance("Ionicons", "MIT", "Ionic")),
    ("octicons", provenance("Octicons", "MIT", "GitHub")),
    ("eva", provenance("Eva Icons", "MIT", "Akveo")),
    ("bootstrap", provenance("Bootstrap Icons", "MIT", "Bootstrap")),
    ("remix", provenance("Remix Icon", "Apache-2.0", "Remix Design")),
    ("brand", provenance("Brand Icons", "Trademark", "Various")),
];

/// Display labels for collections, used by the gallery.
const COLLECTION_LABELS: &[(&str, &str)] = &[
    ("microsoft-365", "Microsoft 365"),
    ("azure", "Azure"),
    ("security", "Security"),
    ("ai", "AI"),
    ("sap", "SAP"),
    ("third-party", "Third Party"),
    ("ui", "UI"),
    ("pideas", "PiDEAS"),
    ("uncategorized", "Uncategorized"),
];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

pub fn collection_provenance(collection: &str) -> Provenance {
    lookup(COLLECTION_META, collection).unwrap_or(UNKNOWN_PROVENANCE)
}

pub fn ui_provenance(ui_set: &str) -> Option<Provenance> {
    lookup(UI_META, ui_set)
}

/// Provenance for an icon: the UI set table wins over the collection table.
pub fn resolve_provenance(collection: &str, ui_set: Option<&str>) -> Provenance {
    ui_set
        .and_then(ui_provenance)
        .unwrap_or_else(|| collection_provenance(collection))
}

pub fn collection_label(collection: &str) -> Option<&'static str> {
    lookup(COLLECTION_LABELS, collection)
}
