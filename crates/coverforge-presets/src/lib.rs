//! coverforge-presets
//!
//! The static style-preset catalog. Pure data — 50 presets across five
//! categories, fixed at compile time and never mutated at runtime, plus the
//! two lookup operations and preset application.

pub mod presets;

use std::sync::LazyLock;

use coverforge_core::models::{Category, CoverPageData, StylePreset};

/// The full catalog, in stable order: Classic, Modern, Creative,
/// Professional, Minimalist, ten presets each. Ids are unique.
pub fn catalog() -> &'static [StylePreset] {
    static CATALOG: LazyLock<Vec<StylePreset>> = LazyLock::new(|| {
        let mut all = Vec::with_capacity(50);
        all.extend(presets::classic::presets());
        all.extend(presets::modern::presets());
        all.extend(presets::creative::presets());
        all.extend(presets::professional::presets());
        all.extend(presets::minimalist::presets());
        all
    });
    &CATALOG
}

/// All presets in the given category, preserving catalog order. Empty for a
/// category with no members, never an error.
pub fn presets_by_category(category: Category) -> Vec<&'static StylePreset> {
    catalog().iter().filter(|p| p.category == category).collect()
}

/// Look up a preset by id.
pub fn preset_by_id(id: &str) -> Option<&'static StylePreset> {
    catalog().iter().find(|p| p.id == id)
}

/// Apply a preset to a record: a full overwrite of the applied style if the
/// id is known, otherwise the record is returned unchanged. The UI only
/// offers valid ids, so an unknown id (e.g. replayed stale state) is a
/// silent no-op rather than an error.
pub fn apply_preset(record: &CoverPageData, id: &str) -> CoverPageData {
    match preset_by_id(id) {
        Some(preset) => record.with_style(preset.styles.clone(), &preset.id),
        None => {
            tracing::debug!(id, "unknown preset id, selection unchanged");
            record.clone()
        }
    }
}
