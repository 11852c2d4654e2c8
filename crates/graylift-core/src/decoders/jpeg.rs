//! JPEG image decoder

use std::path::Path;

use super::DecodedImage;

/// Decode a JPEG file
pub(crate) fn decode_jpeg<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let img =
        image::open(path.as_ref()).map_err(|e| format!("Failed to decode JPEG file: {}", e))?;

    let source_is_grayscale = matches!(
        img.color(),
        image::ColorType::L8 | image::ColorType::L16 | image::ColorType::La8 | image::ColorType::La16
    );

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let data: Vec<f32> = rgb.into_raw().iter().map(|&v| v as f32 / 255.0).collect();

    Ok(DecodedImage {
        width,
        height,
        data,
        channels: 3,
        source_is_grayscale,
    })
}
