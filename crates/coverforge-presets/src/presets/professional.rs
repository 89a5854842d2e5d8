use coverforge_core::models::{
    Category,
    FontFamily::{Mono, Sans, Serif},
    Layout::{Centered, LeftAligned, ModernGrid},
    StylePreset,
};

use super::{PresetRow, build};

pub fn presets() -> Vec<StylePreset> {
    const ROWS: &[PresetRow] = &[
        ("professional-1", "Corporate Black", ("text-4xl", "text-2xl", "text-base"), Sans, "text-gray-900", "text-gray-700", "bg-white", "border-gray-300", LeftAligned, false),
        ("professional-2", "Executive Blue", ("text-5xl", "text-3xl", "text-lg"), Sans, "text-blue-900", "text-blue-700", "bg-blue-50", "border-blue-200", Centered, false),
        ("professional-3", "Business Gray", ("text-4xl", "text-2xl", "text-base"), Sans, "text-slate-800", "text-slate-600", "bg-slate-50", "border-slate-200", LeftAligned, false),
        ("professional-4", "Law Office", ("text-6xl", "text-2xl", "text-base"), Serif, "text-gray-800", "text-amber-600", "bg-white", "border-gray-400", Centered, true),
        ("professional-5", "Medical White", ("text-4xl", "text-xl", "text-sm"), Sans, "text-blue-800", "text-blue-600", "bg-white", "border-blue-200", LeftAligned, false),
        ("professional-6", "Finance Green", ("text-5xl", "text-3xl", "text-lg"), Sans, "text-green-800", "text-green-600", "bg-white", "border-green-300", Centered, false),
        ("professional-7", "Tech Startup", ("text-4xl", "text-2xl", "text-base"), Sans, "text-indigo-800", "text-indigo-600", "bg-gray-50", "border-indigo-200", ModernGrid, true),
        ("professional-8", "Consulting Navy", ("text-6xl", "text-2xl", "text-base"), Serif, "text-slate-900", "text-slate-700", "bg-slate-100", "border-slate-300", LeftAligned, false),
        ("professional-9", "Banking Gold", ("text-4xl", "text-xl", "text-sm"), Serif, "text-yellow-800", "text-yellow-600", "bg-white", "border-yellow-300", Centered, true),
        ("professional-10", "Engineering Steel", ("text-5xl", "text-3xl", "text-lg"), Mono, "text-zinc-800", "text-zinc-600", "bg-zinc-50", "border-zinc-300", ModernGrid, false),
    ];
    build(Category::Professional, ROWS)
}
