//! coverforge-core
//!
//! Pure domain types and operations for the cover-page editor: the document
//! record, style-bundle value types, typed field paths, visibility flags, and
//! the preview projection. No I/O and no UI dependency — this is the shared
//! vocabulary of the Coverforge system.

pub mod error;
pub mod fields;
pub mod models;
pub mod projection;
