pub mod cover;
pub mod style;
pub mod visibility;

pub use cover::{CoverPageData, SubmittedBy, SubmittedTo};
pub use style::{Category, FontFamily, FontScale, Layout, StyleBundle, StylePreset};
pub use visibility::{VisibilityState, VisibleField};
