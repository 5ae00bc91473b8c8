//! Filename-prefix recognition of icon-font families and shard bucketing.
//!
//! Shards keep directory sizes bounded: `tabler_home.svg` lands in
//! `ui/tabler/h/`, an unknown `widget.svg` in `uncategorized/w/wi/`.

use std::sync::LazyLock;

use regex::Regex;

/// A recognised icon-font family.
#[derive(Debug)]
pub struct UiFamily {
    /// Directory under `ui/` the family is filed into.
    pub dir: &'static str,
    /// Optional sub-directory between the family directory and the shard.
    pub variant: Option<&'static str>,
    prefix: Regex,
}

impl UiFamily {
    fn new(dir: &'static str, variant: Option<&'static str>, prefix: &str) -> Self {
        Self {
            dir,
            variant,
            prefix: Regex::new(&format!("(?i)^{}", prefix)).unwrap(),
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.prefix.is_match(file_name)
    }

    /// File name with the family prefix removed.
    pub fn strip<'a>(&self, file_name: &'a str) -> &'a str {
        match self.prefix.find(file_name) {
            Some(m) => &file_name[m.end()..],
            None => file_name,
        }
    }

    /// Path segments under `ui/` for a file of this family.
    pub fn destination(&self, file_name: &str) -> Vec<String> {
        let mut segments = vec![self.dir.to_string()];
        if let Some(variant) = self.variant {
            segments.push(variant.to_string());
        }
        segments.push(shard(self.strip(file_name), 1));
        segments
    }
}

// Order matters: the Font Awesome sub-families must be tried before the bare `fa` prefix.
static UI_FAMILIES: LazyLock<Vec<UiFamily>> = LazyLock::new(|| {
    vec![
        UiFamily::new("tabler", None, "tabler[_-]"),
        UiFamily::new("fontawesome", Some("solid"), "fa_solid_"),
        UiFamily::new("fontawesome", Some("brand"), "fa_brand_"),
        UiFamily::new("fontawesome", Some("other"), "fa[_-]"),
        UiFamily::new("mdi", None, "mdi[_-]"),
        UiFamily::new("lucide", None, "lucide[_-]"),
        UiFamily::new("phosphor", None, "phosphor[_-]"),
        UiFamily::new("cssgg", None, "cssgg[_-]"),
        UiFamily::new("heroicons", None, "heroicons[_-]"),
        UiFamily::new("feather", None, "feather[_-]"),
        UiFamily::new("ionicons", None, "ionicons[_-]"),
        UiFamily::new("octicons", None, "octicons[_-]"),
        UiFamily::new("eva", None, "eva[_-]"),
        UiFamily::new("bootstrap", None, "bootstrap[_-]"),
        UiFamily::new("remix", None, "remix[_-]"),
        UiFamily::new("brand", None, "brand[_-]"),
    ]
});

/// Find the icon-font family a file name belongs to, by prefix.
pub fn ui_family(file_name: &str) -> Option<&'static UiFamily> {
    UI_FAMILIES.iter().find(|family| family.matches(file_name))
}

/// Bucket name from the first `len` alphanumeric characters, padded with `_`.
///
/// A name without any alphanumeric character falls into the `_` bucket.
pub fn shard(name: &str, len: usize) -> String {
    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(len)
        .collect::<String>()
        .to_lowercase();
    if prefix.is_empty() {
        return "_".to_string();
    }
    format!("{:_<width$}", prefix, width = len)
}
