//! A4 PDF packaging.
//!
//! Wraps one captured raster into a single-page A4 portrait document, scaled
//! to full page width and anchored at the top of the page. Page layout and
//! encoding are delegated to `printpdf`. Decoding goes through printpdf's
//! re-exported image crate so the embedded-image types match.

use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::error::ExportError;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MM_PER_INCH: f32 = 25.4;

/// Package captured PNG bytes as a one-page A4 PDF.
pub fn package_pdf(png_bytes: &[u8], title: &str) -> Result<Vec<u8>, ExportError> {
    let decoded = printpdf::image_crate::load_from_memory(png_bytes)
        .map_err(|e| ExportError::Image(e.to_string()))?;
    // printpdf embeds RGB; flatten any alpha from the capture.
    let rgb = decoded.to_rgb8();
    let (width_px, height_px) = rgb.dimensions();
    let flattened = printpdf::image_crate::DynamicImage::ImageRgb8(rgb);

    let (doc, page, layer) = PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "cover");
    let layer_ref = doc.get_page(page).get_layer(layer);

    // Choose a dpi so the raster spans the full page width, then translate
    // so its top edge sits at the top of the page.
    let dpi = width_px as f32 / (A4_WIDTH_MM / MM_PER_INCH);
    let height_mm = height_px as f32 / dpi * MM_PER_INCH;

    let embedded = Image::from_dynamic_image(&flattened);
    embedded.add_to_layer(
        layer_ref,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(A4_HEIGHT_MM - height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    tracing::debug!(title, bytes = bytes.len(), "PDF packaged");
    Ok(bytes)
}
