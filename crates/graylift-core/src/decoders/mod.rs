//! Image decoders
//!
//! Decode uploaded PNG and JPEG files into linear RGB data ready for
//! luminance projection. The kernel never touches files; these
//! collaborators feed it.

mod jpeg;
mod png;

#[cfg(test)]
mod tests;

use std::path::Path;

/// Decoded image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGB data (f32, 0.0-1.0 range)
    pub data: Vec<f32>,

    /// Number of channels (always 3 after decoding)
    pub channels: u8,

    /// Whether the source file was stored as grayscale, even though
    /// the data has been expanded to RGB for the common pipeline
    pub source_is_grayscale: bool,
}

/// Decode an image from a file path, dispatching on the extension.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "jpg" | "jpeg" => jpeg::decode_jpeg(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}
