//! Text normalization shared by the builder, the reorganizer and the gallery.

use std::sync::LazyLock;

use regex::Regex;

static CAMEL_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Underscores become spaces and a space is inserted at lower-to-upper boundaries.
fn split_words(value: &str) -> String {
    let spaced = value.replace('_', " ");
    CAMEL_BOUNDARY_REGEX
        .replace_all(&spaced, "$1 $2")
        .into_owned()
}

/// Split a name into lowercase search tokens.
///
/// # Examples
///
/// ```
/// use glyphs::utils::to_tokens;
///
/// assert_eq!(to_tokens("cloud_vmInstance"), vec!["cloud", "vm", "instance"]);
/// assert_eq!(to_tokens("microsoft-365"), vec!["microsoft", "365"]);
/// assert!(to_tokens("").is_empty());
/// ```
pub fn to_tokens(value: &str) -> Vec<String> {
    let lowered = split_words(value).to_lowercase();
    NON_ALPHANUMERIC_REGEX
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Humanize a file or directory name for display.
///
/// # Examples
///
/// ```
/// use glyphs::utils::to_title;
///
/// assert_eq!(to_title("cloud_vmInstance"), "Cloud Vm Instance");
/// assert_eq!(to_title("third-party"), "Third-party");
/// ```
pub fn to_title(value: &str) -> String {
    let words = split_words(value);
    let collapsed = WHITESPACE_REGEX.replace_all(words.trim(), " ");
    collapsed
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a URL/path friendly identifier.
///
/// # Examples
///
/// ```
/// use glyphs::utils::slugify;
///
/// assert_eq!(slugify("Identity & Access"), "identity-and-access");
/// assert_eq!(slugify("microsoft-365::Cloud"), "microsoft-365-cloud");
/// assert_eq!(slugify("--Edge--"), "edge");
/// ```
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase().replace('&', "and");
    NON_ALPHANUMERIC_REGEX
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
