//! PNG image decoder

use std::path::Path;

use super::DecodedImage;

/// Decode a PNG file
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;
    let bytes = &buf[..frame_info.buffer_size()];

    let source_is_grayscale = matches!(color_type, png::ColorType::Grayscale);

    let pixel_count = (width * height) as usize;
    let data = match (color_type, bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            check_buffer_len(bytes, pixel_count)?;
            expand_gray(bytes.iter().map(|&v| v as f32 / 255.0))
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            check_buffer_len(bytes, pixel_count * 2)?;
            // PNG 16-bit samples are big-endian
            expand_gray(bytes.chunks_exact(2).map(|c| {
                u16::from_be_bytes([c[0], c[1]]) as f32 / 65535.0
            }))
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            check_buffer_len(bytes, pixel_count * 3)?;
            bytes.iter().map(|&v| v as f32 / 255.0).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            check_buffer_len(bytes, pixel_count * 6)?;
            bytes
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]) as f32 / 65535.0)
                .collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            check_buffer_len(bytes, pixel_count * 4)?;
            // Drop alpha, keep RGB
            let mut rgb = Vec::with_capacity(pixel_count * 3);
            for rgba in bytes.chunks_exact(4) {
                rgb.push(rgba[0] as f32 / 255.0);
                rgb.push(rgba[1] as f32 / 255.0);
                rgb.push(rgba[2] as f32 / 255.0);
            }
            rgb
        }
        (png::ColorType::GrayscaleAlpha, _) => {
            return Err("Grayscale+Alpha PNG not supported".to_string());
        }
        (png::ColorType::Indexed, _) => {
            return Err("Indexed PNG not supported".to_string());
        }
        _ => {
            return Err(format!(
                "Unsupported PNG format: {:?} with bit depth {:?}",
                color_type, bit_depth
            ));
        }
    };

    Ok(DecodedImage {
        width,
        height,
        data,
        channels: 3,
        source_is_grayscale,
    })
}

/// Verify the decoded byte count matches the header's promise.
fn check_buffer_len(bytes: &[u8], expected: usize) -> Result<(), String> {
    if bytes.len() != expected {
        return Err(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected,
            bytes.len()
        ));
    }
    Ok(())
}

/// Replicate normalized gray samples into interleaved RGB.
fn expand_gray<I: Iterator<Item = f32>>(samples: I) -> Vec<f32> {
    let mut rgb = Vec::with_capacity(samples.size_hint().0 * 3);
    for v in samples {
        rgb.push(v);
        rgb.push(v);
        rgb.push(v);
    }
    rgb
}
