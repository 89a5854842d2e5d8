use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use coverforge_export::encode::{RasterFormat, encode_raster};
use coverforge_export::pdf::package_pdf;

fn sample_capture_png() -> Vec<u8> {
    let pixels = RgbaImage::from_pixel(64, 90, Rgba([220, 235, 250, 255]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(pixels)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[test]
fn format_names_parse() {
    assert_eq!(RasterFormat::parse("png"), Some(RasterFormat::Png));
    assert_eq!(RasterFormat::parse("jpg"), Some(RasterFormat::Jpeg));
    assert_eq!(RasterFormat::parse("jpeg"), Some(RasterFormat::Jpeg));
    assert_eq!(RasterFormat::parse("webp"), Some(RasterFormat::Webp));
    assert_eq!(RasterFormat::parse("tiff"), None);
}

#[test]
fn raster_reencodes_into_each_format() {
    let png = sample_capture_png();

    for format in [RasterFormat::Png, RasterFormat::Jpeg, RasterFormat::Webp] {
        let bytes = encode_raster(&png, format).unwrap();
        assert!(!bytes.is_empty());

        // The output decodes back at the original dimensions.
        let roundtrip = image::load_from_memory(&bytes).unwrap();
        assert_eq!(roundtrip.width(), 64);
        assert_eq!(roundtrip.height(), 90);
    }
}

#[test]
fn garbage_capture_bytes_are_an_error() {
    assert!(encode_raster(b"not a png", RasterFormat::Png).is_err());
    assert!(package_pdf(b"not a png", "Broken").is_err());
}

#[test]
fn pdf_packaging_produces_a_pdf() {
    let png = sample_capture_png();
    let pdf = package_pdf(&png, "Dynamic Cover Page Generator").unwrap();

    assert!(pdf.starts_with(b"%PDF"));
    assert!(pdf.len() > png.len() / 2);
}
