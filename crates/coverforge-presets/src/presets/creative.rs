use coverforge_core::models::{
    Category,
    FontFamily::{Mono, Sans, Serif},
    Layout::{Centered, LeftAligned, ModernGrid},
    StylePreset,
};

use super::{PresetRow, build};

pub fn presets() -> Vec<StylePreset> {
    const ROWS: &[PresetRow] = &[
        ("creative-1", "Sunset Vibes", ("text-6xl", "text-3xl", "text-lg"), Sans, "text-orange-500", "text-red-400", "bg-gradient-to-br from-orange-100 to-red-100", "border-orange-300", Centered, true),
        ("creative-2", "Ocean Wave", ("text-5xl", "text-2xl", "text-base"), Sans, "text-blue-500", "text-cyan-400", "bg-gradient-to-br from-blue-100 to-cyan-100", "border-blue-300", ModernGrid, true),
        ("creative-3", "Forest Dream", ("text-4xl", "text-2xl", "text-base"), Serif, "text-green-600", "text-emerald-500", "bg-gradient-to-br from-green-100 to-emerald-100", "border-green-300", Centered, true),
        ("creative-4", "Galaxy Purple", ("text-5xl", "text-3xl", "text-lg"), Sans, "text-purple-400", "text-pink-400", "bg-gradient-to-br from-purple-900 to-indigo-900", "border-purple-400", ModernGrid, true),
        ("creative-5", "Autumn Leaves", ("text-4xl", "text-2xl", "text-base"), Serif, "text-amber-600", "text-orange-500", "bg-gradient-to-br from-amber-100 to-orange-100", "border-amber-300", Centered, true),
        ("creative-6", "Arctic Ice", ("text-6xl", "text-2xl", "text-base"), Sans, "text-sky-600", "text-ice-blue-400", "bg-gradient-to-br from-sky-100 to-blue-100", "border-sky-300", LeftAligned, false),
        ("creative-7", "Cherry Blossom", ("text-4xl", "text-xl", "text-sm"), Serif, "text-pink-600", "text-rose-400", "bg-gradient-to-br from-pink-100 to-rose-100", "border-pink-300", Centered, true),
        ("creative-8", "Volcanic Red", ("text-5xl", "text-3xl", "text-lg"), Sans, "text-red-600", "text-orange-500", "bg-gradient-to-br from-red-100 to-orange-100", "border-red-300", ModernGrid, true),
        ("creative-9", "Mint Fresh", ("text-4xl", "text-2xl", "text-base"), Sans, "text-mint-600", "text-green-400", "bg-gradient-to-br from-mint-100 to-green-100", "border-mint-300", Centered, false),
        ("creative-10", "Cosmic Blue", ("text-6xl", "text-2xl", "text-base"), Mono, "text-blue-400", "text-purple-400", "bg-gradient-to-br from-blue-900 to-purple-900", "border-blue-400", ModernGrid, true),
    ];
    build(Category::Creative, ROWS)
}
