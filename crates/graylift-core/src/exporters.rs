//! Image exporters
//!
//! Write processed intensity grids back out as image files. The
//! upload/apply/save flow persists both sides of every run as 8-bit
//! grayscale PNG.

use std::path::Path;

use crate::grid::IntensityGrid;

/// Export an intensity grid as an 8-bit grayscale PNG.
pub fn export_gray8<P: AsRef<Path>>(grid: &IntensityGrid, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    if grid.is_empty() {
        return Err("Cannot export an empty grid".to_string());
    }

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, grid.width() as u32, grid.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    png_writer
        .write_image_data(grid.as_slice())
        .map_err(|e| format!("Failed to write PNG image data: {}", e))?;

    Ok(())
}
