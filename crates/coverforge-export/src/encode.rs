//! Raster re-encoding for image exports.
//!
//! The webview captures the preview surface as PNG; image exports re-encode
//! those bytes into the requested format. All pixel work is delegated to the
//! `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Webp,
}

impl RasterFormat {
    /// Parse the format name the frontend sends ("png" / "jpg" / "webp").
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "png" => Some(RasterFormat::Png),
            "jpg" | "jpeg" => Some(RasterFormat::Jpeg),
            "webp" => Some(RasterFormat::Webp),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpg",
            RasterFormat::Webp => "webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            RasterFormat::Png => ImageFormat::Png,
            RasterFormat::Jpeg => ImageFormat::Jpeg,
            RasterFormat::Webp => ImageFormat::WebP,
        }
    }
}

/// Re-encode captured PNG bytes into the requested format.
pub fn encode_raster(png_bytes: &[u8], format: RasterFormat) -> Result<Vec<u8>, ExportError> {
    let decoded =
        image::load_from_memory(png_bytes).map_err(|e| ExportError::Image(e.to_string()))?;

    // JPEG has no alpha channel; flatten before encoding.
    let encodable = match format {
        RasterFormat::Jpeg => DynamicImage::ImageRgb8(decoded.to_rgb8()),
        _ => decoded,
    };

    let mut buf = Cursor::new(Vec::new());
    encodable
        .write_to(&mut buf, format.image_format())
        .map_err(|e| ExportError::Image(e.to_string()))?;

    tracing::debug!(
        format = format.extension(),
        bytes = buf.get_ref().len(),
        "raster re-encoded"
    );
    Ok(buf.into_inner())
}
