//! Size-variant detection: `icon_24.svg` and `icon_48.svg` belong to the same
//! family `icon`.

use std::sync::LazyLock;

use regex::Regex;

pub const KNOWN_SIZES: &[u32] = &[16, 20, 24, 28, 32, 36, 40, 48, 64, 72, 96, 128, 256, 512, 1024];

static SIZE_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[_-])(\d{2,4})(?:px)?$").unwrap());

fn strip_extension(file: &str) -> &str {
    let base = file.rsplit('/').next().unwrap_or(file);
    match base.rfind('.') {
        Some(idx) if idx > 0 => &base[..idx],
        _ => base,
    }
}

/// Returns the known pixel size and the byte offset where its suffix starts.
fn size_suffix(stem: &str) -> Option<(u32, usize)> {
    let captures = SIZE_SUFFIX_REGEX.captures(stem)?;
    let size: u32 = captures.get(1)?.as_str().parse().ok()?;
    let start = captures.get(0)?.start();
    KNOWN_SIZES.contains(&size).then_some((size, start))
}

/// Pixel size encoded at the end of a file name, if it is a known size.
pub fn size_variant(file: &str) -> Option<u32> {
    size_suffix(strip_extension(file)).map(|(size, _)| size)
}

/// Lowercased base name with any known size suffix removed.
pub fn family_key(file: &str) -> String {
    let stem = strip_extension(file);
    let base = match size_suffix(stem) {
        Some((_, start)) => &stem[..start],
        None => stem,
    };
    base.to_lowercase()
}
