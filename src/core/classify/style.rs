use std::fmt;

use serde::{Deserialize, Serialize};

use super::UI_COLLECTION;

/// Extensions rendered as full-color bitmaps.
pub const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Color,
    Filled,
    Line,
    Flat,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Color => "color",
            Style::Filled => "filled",
            Style::Line => "line",
            Style::Flat => "flat",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the visual style of an icon. First matching rule wins.
pub fn infer_style(file_name: &str, extension: &str, collection: &str, ui_set: Option<&str>) -> Style {
    let lower = file_name.to_lowercase();
    if lower.contains("color") || RASTER_EXTENSIONS.contains(&extension) {
        return Style::Color;
    }
    if lower.contains("filled") || lower.contains("fill") {
        return Style::Filled;
    }
    if collection == UI_COLLECTION || ui_set.is_some() {
        return Style::Line;
    }
    Style::Flat
}
