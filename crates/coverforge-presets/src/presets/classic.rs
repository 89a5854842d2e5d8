use coverforge_core::models::{Category, FontFamily::Serif, Layout::Centered, StylePreset};

use super::{PresetRow, build};

pub fn presets() -> Vec<StylePreset> {
    const ROWS: &[PresetRow] = &[
        ("classic-1", "Classic Blue", ("text-4xl", "text-2xl", "text-base"), Serif, "text-blue-800", "text-blue-600", "bg-white", "border-blue-200", Centered, true),
        ("classic-2", "Royal Purple", ("text-5xl", "text-2xl", "text-base"), Serif, "text-purple-800", "text-purple-600", "bg-purple-50", "border-purple-200", Centered, true),
        ("classic-3", "Forest Green", ("text-4xl", "text-xl", "text-sm"), Serif, "text-green-800", "text-green-600", "bg-green-50", "border-green-200", Centered, false),
        ("classic-4", "Burgundy Elegance", ("text-4xl", "text-2xl", "text-base"), Serif, "text-red-900", "text-red-700", "bg-red-50", "border-red-200", Centered, true),
        ("classic-5", "Navy Scholar", ("text-5xl", "text-3xl", "text-lg"), Serif, "text-slate-800", "text-slate-600", "bg-slate-50", "border-slate-200", Centered, true),
        ("classic-6", "Traditional Gold", ("text-4xl", "text-2xl", "text-base"), Serif, "text-yellow-800", "text-yellow-700", "bg-yellow-50", "border-yellow-200", Centered, true),
        ("classic-7", "Crimson Heritage", ("text-3xl", "text-xl", "text-sm"), Serif, "text-red-800", "text-red-600", "bg-white", "border-red-300", Centered, false),
        ("classic-8", "Oxford Blue", ("text-4xl", "text-2xl", "text-base"), Serif, "text-indigo-900", "text-indigo-700", "bg-indigo-50", "border-indigo-200", Centered, true),
        ("classic-9", "Emerald Academic", ("text-5xl", "text-2xl", "text-base"), Serif, "text-emerald-800", "text-emerald-600", "bg-emerald-50", "border-emerald-200", Centered, true),
        ("classic-10", "Amber Scholar", ("text-4xl", "text-xl", "text-sm"), Serif, "text-amber-800", "text-amber-600", "bg-amber-50", "border-amber-200", Centered, false),
    ];
    build(Category::Classic, ROWS)
}
