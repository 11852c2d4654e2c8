//! Tests for image decoders

use super::*;
use crate::exporters::export_gray8;
use crate::grid::IntensityGrid;

/// Write a small 8-bit RGB PNG and return its path inside the temp dir.
fn write_rgb8_png(dir: &tempfile::TempDir, name: &str, width: u32, height: u32, rgb: &[u8]) -> std::path::PathBuf {
    use std::fs::File;
    use std::io::BufWriter;

    let path = dir.path().join(name);
    let file = File::create(&path).expect("create test PNG");
    let mut encoder = ::png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(::png::ColorType::Rgb);
    encoder.set_depth(::png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("PNG header");
    writer.write_image_data(rgb).expect("PNG data");
    drop(writer);
    path
}

#[test]
fn test_decode_rgb8_png() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_rgb8_png(&dir, "rgb.png", 2, 1, &[255, 0, 0, 0, 255, 0]);

    let decoded = decode_image(&path).expect("decodable PNG");
    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 1);
    assert_eq!(decoded.channels, 3);
    assert!(!decoded.source_is_grayscale);
    assert_eq!(decoded.data.len(), 6);
    assert!((decoded.data[0] - 1.0).abs() < 1e-6);
    assert!((decoded.data[1]).abs() < 1e-6);
    assert!((decoded.data[4] - 1.0).abs() < 1e-6);
}

#[test]
fn test_decode_gray8_png_roundtrip() {
    // Export a grid through the gray8 exporter, decode it back, and
    // project to luminance: equal channels must survive unchanged
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("gray.png");
    let grid = IntensityGrid::from_vec(3, 2, vec![0, 50, 100, 150, 200, 255]).expect("test grid");
    export_gray8(&grid, &path).expect("exportable grid");

    let decoded = decode_image(&path).expect("decodable PNG");
    assert!(decoded.source_is_grayscale);
    let back = IntensityGrid::from_decoded(&decoded).expect("projectable image");
    assert_eq!(back.as_slice(), grid.as_slice());
}

#[test]
fn test_decode_rejects_unknown_extension() {
    let result = decode_image("image.bmp");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unsupported file format"));
}

#[test]
fn test_decode_rejects_missing_extension() {
    let result = decode_image("no_extension");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No file extension"));
}

#[test]
fn test_decode_missing_file_errors() {
    let result = decode_image("definitely/not/here.png");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to open"));
}

#[test]
fn test_export_rejects_empty_grid() {
    let dir = tempfile::tempdir().expect("temp dir");
    let grid = IntensityGrid::new(0, 0);
    let result = export_gray8(&grid, dir.path().join("empty.png"));
    assert!(result.is_err());
}
