//! Global histogram equalization
//!
//! Redistributes intensities so the output histogram approximates a
//! uniform distribution, recovering contrast in globally under- or
//! over-exposed images.
//!
//! The lookup table is built from a masked cumulative distribution:
//! buckets with a zero cumulative count are excluded when the CDF range
//! is rescaled to [0, 255], and their table entries are filled with 0.
//! This is a deliberate normalization choice (not the plain
//! cdf / n * 255 form) and is kept exactly for output parity with
//! reference images.


use crate::grid::IntensityGrid;

/// Number of histogram buckets: one per 8-bit intensity value.
pub const HISTOGRAM_BUCKETS: usize = 256;

/// Count sample occurrences per intensity value.
pub fn histogram(grid: &IntensityGrid) -> [u32; HISTOGRAM_BUCKETS] {
    let mut hist = [0u32; HISTOGRAM_BUCKETS];
    for &v in grid.as_slice() {
        hist[v as usize] += 1;
    }
    hist
}

/// Cumulative sum of a histogram.
pub fn cumulative(hist: &[u32; HISTOGRAM_BUCKETS]) -> [u32; HISTOGRAM_BUCKETS] {
    let mut cdf = [0u32; HISTOGRAM_BUCKETS];
    let mut running = 0u32;
    for (bucket, &count) in hist.iter().enumerate() {
        running += count;
        cdf[bucket] = running;
    }
    cdf
}

/// Equalize a grid's histogram.
///
/// Computes the 256-bucket histogram and its CDF, rescales the masked
/// CDF range linearly to [0, 255], and remaps every sample through the
/// resulting lookup table. Takes no parameters; the histogram and CDF
/// are transient and recomputed on every call.
///
/// A single-valued grid would collapse the masked CDF range to a
/// point; rather than divide by zero, the result is defined as an
/// all-zero grid of the input's shape.
pub fn equalize_histogram(grid: &IntensityGrid) -> IntensityGrid {
    if grid.is_empty() {
        return grid.clone();
    }

    let hist = histogram(grid);
    let cdf = cumulative(&hist);

    let lut = match build_equalization_lut(&cdf) {
        Some(lut) => lut,
        // Degenerate single-valued input: defined as all zeros.
        None => return IntensityGrid::new(grid.width(), grid.height()),
    };

    let data: Vec<u8> = grid.as_slice().iter().map(|&v| lut[v as usize]).collect();
    IntensityGrid::from_parts(grid.width(), grid.height(), data)
}

/// Build the equalization lookup table from a CDF.
///
/// Zero-count buckets are masked out of the rescale: the range minimum
/// is the first non-zero cumulative count (the CDF is non-decreasing,
/// so that is its masked minimum) and masked entries stay 0 in the
/// table. Returns `None` when the masked range is empty or collapsed
/// to a single point.
fn build_equalization_lut(cdf: &[u32; HISTOGRAM_BUCKETS]) -> Option<[u8; HISTOGRAM_BUCKETS]> {
    let cdf_min = cdf.iter().copied().find(|&c| c > 0)?;
    let cdf_max = cdf[HISTOGRAM_BUCKETS - 1];
    if cdf_max == cdf_min {
        return None;
    }

    let span = (cdf_max - cdf_min) as f32;
    let mut lut = [0u8; HISTOGRAM_BUCKETS];
    for (bucket, &c) in cdf.iter().enumerate() {
        if c > 0 {
            lut[bucket] = ((c - cdf_min) as f32 * 255.0 / span) as u8;
        }
    }
    Some(lut)
}
