use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Catalog grouping for style presets. Fixed set — downstream grouping and
/// selection logic assumes exactly these five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Classic,
    Modern,
    Creative,
    Professional,
    Minimalist,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Classic,
        Category::Modern,
        Category::Creative,
        Category::Professional,
        Category::Minimalist,
    ];
}

/// Font-family token. Serialized as the CSS utility class the preview uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FontFamily {
    #[serde(rename = "font-serif")]
    Serif,
    #[serde(rename = "font-sans")]
    Sans,
    #[serde(rename = "font-mono")]
    Mono,
}

impl FontFamily {
    pub fn css_class(self) -> &'static str {
        match self {
            FontFamily::Serif => "font-serif",
            FontFamily::Sans => "font-sans",
            FontFamily::Mono => "font-mono",
        }
    }
}

/// Layout arrangement for the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Layout {
    Centered,
    LeftAligned,
    ModernGrid,
}

/// Type-scale tokens for the three text tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FontScale {
    pub title: String,
    pub heading: String,
    pub body: String,
}

/// One complete visual treatment. The same value type is used by the catalog
/// and by the document record, so applying a preset is a total, type-checked
/// assignment rather than a field-by-field merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StyleBundle {
    pub font_size: FontScale,
    pub font_family: FontFamily,
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub border_style: String,
    pub layout: Layout,
    pub decorative_elements: bool,
}

/// A named, selectable entry in the style catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StylePreset {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub styles: StyleBundle,
}
