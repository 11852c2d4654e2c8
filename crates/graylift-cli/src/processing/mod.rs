//! Single image processing and path handling.

mod input;
mod pairs;

pub use input::{determine_output_path, expand_inputs, SUPPORTED_EXTENSIONS};
pub use pairs::save_pair;

use std::path::{Path, PathBuf};

use graylift_core::decoders::decode_image;
use graylift_core::exporters::export_gray8;
use graylift_core::models::Operation;
use graylift_core::{kernel, IntensityGrid};

/// What one processed image produced.
pub struct ProcessOutcome {
    /// Where the enhanced image was written.
    pub output_path: PathBuf,
    /// The timestamped pair directory, when pair persistence was on.
    pub pair_dir: Option<PathBuf>,
}

/// Process a single image file end to end.
///
/// Decodes, projects to luminance, applies the operation, writes the
/// result, and (optionally) archives the input/output pair under
/// `pairs_dir`.
pub fn process_single_image(
    input: &Path,
    operation: &Operation,
    out: &Option<PathBuf>,
    pairs_dir: Option<&Path>,
    debug: bool,
) -> Result<ProcessOutcome, String> {
    let decoded = decode_image(input)?;
    let grid = IntensityGrid::from_decoded(&decoded)?;

    if debug {
        let (min, max) = sample_range(&grid);
        eprintln!(
            "[debug] {}: {}x{} luminance, range [{}, {}]{}",
            input.display(),
            grid.width(),
            grid.height(),
            min,
            max,
            if decoded.source_is_grayscale {
                ", grayscale source"
            } else {
                ""
            }
        );
    }

    let result = kernel::apply(&grid, operation)?;

    let output_path = determine_output_path(input, out, operation.name())?;
    export_gray8(&result, &output_path)?;

    let pair_dir = match pairs_dir {
        Some(dir) => Some(save_pair(&grid, &result, dir)?),
        None => None,
    };

    Ok(ProcessOutcome {
        output_path,
        pair_dir,
    })
}

fn sample_range(grid: &IntensityGrid) -> (u8, u8) {
    let min = grid.as_slice().iter().copied().min().unwrap_or(0);
    let max = grid.as_slice().iter().copied().max().unwrap_or(0);
    (min, max)
}
