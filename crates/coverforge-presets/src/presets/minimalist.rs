use coverforge_core::models::{
    Category,
    FontFamily::{Mono, Sans, Serif},
    Layout::{Centered, LeftAligned},
    StylePreset,
};

use super::{PresetRow, build};

pub fn presets() -> Vec<StylePreset> {
    const ROWS: &[PresetRow] = &[
        ("minimalist-1", "Pure White", ("text-6xl", "text-3xl", "text-lg"), Sans, "text-black", "text-gray-800", "bg-white", "border-gray-100", LeftAligned, false),
        ("minimalist-2", "Simple Black", ("text-4xl", "text-2xl", "text-base"), Sans, "text-white", "text-gray-300", "bg-black", "border-gray-800", Centered, false),
        ("minimalist-3", "Clean Lines", ("text-5xl", "text-2xl", "text-base"), Mono, "text-gray-900", "text-gray-600", "bg-gray-50", "border-gray-200", LeftAligned, false),
        ("minimalist-4", "Stark Contrast", ("text-7xl", "text-xl", "text-sm"), Sans, "text-black", "text-gray-700", "bg-white", "border-black", Centered, false),
        ("minimalist-5", "Subtle Gray", ("text-4xl", "text-3xl", "text-lg"), Sans, "text-gray-800", "text-gray-600", "bg-gray-100", "border-gray-300", LeftAligned, false),
        ("minimalist-6", "Monochrome", ("text-6xl", "text-2xl", "text-base"), Mono, "text-zinc-900", "text-zinc-700", "bg-zinc-50", "border-zinc-200", Centered, false),
        ("minimalist-7", "Paper White", ("text-4xl", "text-2xl", "text-base"), Serif, "text-stone-900", "text-stone-700", "bg-stone-50", "border-stone-200", LeftAligned, false),
        ("minimalist-8", "Essential Blue", ("text-5xl", "text-xl", "text-sm"), Sans, "text-blue-900", "text-blue-700", "bg-white", "border-blue-100", Centered, false),
        ("minimalist-9", "Neutral Beige", ("text-6xl", "text-3xl", "text-lg"), Sans, "text-amber-900", "text-amber-700", "bg-amber-50", "border-amber-100", LeftAligned, false),
        ("minimalist-10", "Void Black", ("text-4xl", "text-2xl", "text-base"), Mono, "text-gray-100", "text-gray-400", "bg-gray-900", "border-gray-700", Centered, false),
    ];
    build(Category::Minimalist, ROWS)
}
