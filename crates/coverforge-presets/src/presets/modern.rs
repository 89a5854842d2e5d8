use coverforge_core::models::{
    Category,
    FontFamily::{Mono, Sans},
    Layout::{Centered, LeftAligned, ModernGrid},
    StylePreset,
};

use super::{PresetRow, build};

pub fn presets() -> Vec<StylePreset> {
    const ROWS: &[PresetRow] = &[
        ("modern-1", "Tech Blue", ("text-5xl", "text-3xl", "text-lg"), Sans, "text-blue-600", "text-cyan-500", "bg-gray-50", "border-blue-300", ModernGrid, true),
        ("modern-2", "Neon Gradient", ("text-4xl", "text-2xl", "text-base"), Sans, "text-pink-600", "text-purple-500", "bg-gray-900", "border-pink-400", ModernGrid, true),
        ("modern-3", "Clean Slate", ("text-6xl", "text-3xl", "text-lg"), Sans, "text-gray-800", "text-gray-600", "bg-white", "border-gray-200", LeftAligned, false),
        ("modern-4", "Electric Orange", ("text-4xl", "text-2xl", "text-base"), Sans, "text-orange-600", "text-orange-400", "bg-orange-50", "border-orange-300", ModernGrid, true),
        ("modern-5", "Cyber Green", ("text-5xl", "text-2xl", "text-base"), Mono, "text-green-500", "text-lime-400", "bg-gray-900", "border-green-400", ModernGrid, true),
        ("modern-6", "Digital Purple", ("text-4xl", "text-xl", "text-sm"), Sans, "text-violet-600", "text-violet-400", "bg-violet-50", "border-violet-300", ModernGrid, false),
        ("modern-7", "Future Teal", ("text-6xl", "text-3xl", "text-lg"), Sans, "text-teal-600", "text-teal-400", "bg-teal-50", "border-teal-300", LeftAligned, true),
        ("modern-8", "Matrix Black", ("text-4xl", "text-2xl", "text-base"), Mono, "text-green-400", "text-lime-300", "bg-black", "border-green-500", ModernGrid, true),
        ("modern-9", "Chrome Silver", ("text-5xl", "text-2xl", "text-base"), Sans, "text-gray-700", "text-gray-500", "bg-gray-100", "border-gray-300", Centered, false),
        ("modern-10", "Neon Pink", ("text-4xl", "text-xl", "text-sm"), Sans, "text-pink-500", "text-fuchsia-400", "bg-pink-50", "border-pink-300", ModernGrid, true),
    ];
    build(Category::Modern, ROWS)
}
