//! Per-category preset tables.
//!
//! Each module holds one category's ten presets as a compact row table and
//! maps it into [`StylePreset`] values.

pub mod classic;
pub mod creative;
pub mod minimalist;
pub mod modern;
pub mod professional;

use coverforge_core::models::{Category, FontFamily, FontScale, Layout, StyleBundle, StylePreset};

/// (id, name, (title, heading, body), family, primary, accent, background,
/// border, layout, decorative)
pub(crate) type PresetRow = (
    &'static str,
    &'static str,
    (&'static str, &'static str, &'static str),
    FontFamily,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Layout,
    bool,
);

pub(crate) fn build(category: Category, rows: &[PresetRow]) -> Vec<StylePreset> {
    rows.iter()
        .map(
            |&(id, name, (title, heading, body), family, primary, accent, background, border, layout, decorative)| {
                StylePreset {
                    id: id.to_string(),
                    name: name.to_string(),
                    category,
                    styles: StyleBundle {
                        font_size: FontScale {
                            title: title.to_string(),
                            heading: heading.to_string(),
                            body: body.to_string(),
                        },
                        font_family: family,
                        primary_color: primary.to_string(),
                        accent_color: accent.to_string(),
                        background_color: background.to_string(),
                        border_style: border.to_string(),
                        layout,
                        decorative_elements: decorative,
                    },
                }
            },
        )
        .collect()
}
