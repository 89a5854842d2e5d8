//! coverforge-export
//!
//! Rendering and export: the Tera HTML surface for the preview projection,
//! export file naming, raster re-encoding via the `image` crate, and A4 PDF
//! packaging via `printpdf`. Capturing the surface into a raster is the
//! webview's job — this crate only consumes already-captured PNG bytes.

pub mod encode;
pub mod error;
pub mod naming;
pub mod pdf;
pub mod render;
