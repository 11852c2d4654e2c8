//! Spatial neighborhood filters
//!
//! Sliding-window reductions sharing one windowing discipline: the
//! input is copied once into a zero-padded buffer with a border of
//! `size / 2` samples per side, then a size x size window is read for
//! every output position and reduced to a scalar.
//!
//! The border policy is exactly zero-padding (not reflection or edge
//! replication), which darkens filter output near the image edges.
//! The padded buffer and the window scratch vector are allocated once
//! per call and reused across all positions.

mod knn;

#[cfg(test)]
mod tests;

pub use knn::knn_mean_filter;

use crate::grid::IntensityGrid;

/// Fixed weight kernel of the weighted mean filter, a discrete
/// Gaussian-like 3x3 stencil.
pub const WEIGHTED_MEAN_KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Normalization divisor of [`WEIGHTED_MEAN_KERNEL`].
pub const WEIGHTED_MEAN_KERNEL_SUM: u32 = 16;

/// Validate a neighborhood size: odd and at least 1.
pub(crate) fn check_filter_size(size: usize) -> Result<(), String> {
    if size == 0 || size % 2 == 0 {
        return Err(format!(
            "filter size must be an odd value >= 1, got {}",
            size
        ));
    }
    Ok(())
}

/// Validate the adaptive filter's neighbor count and deviation
/// threshold against an (already validated) window size.
pub(crate) fn check_knn_params(size: usize, k: usize, theta: f32) -> Result<(), String> {
    if k < 1 {
        return Err(format!("k must be >= 1, got {}", k));
    }
    let window_samples = size * size;
    if k > window_samples {
        return Err(format!(
            "k must be <= {} (the {}x{} window sample count), got {}",
            window_samples, size, size, k
        ));
    }
    if !theta.is_finite() || theta < 0.0 {
        return Err(format!(
            "theta must be a non-negative finite value, got {}",
            theta
        ));
    }
    Ok(())
}

/// Input grid enlarged by a zero-valued border, sized for one filter
/// invocation and discarded with it.
pub(crate) struct PaddedGrid {
    data: Vec<u8>,
    padded_width: usize,
}

impl PaddedGrid {
    /// Copy `grid` into a fresh buffer with `pad` zero samples on each
    /// side.
    pub(crate) fn new(grid: &IntensityGrid, pad: usize) -> Self {
        let padded_width = grid.width() + 2 * pad;
        let padded_height = grid.height() + 2 * pad;
        let mut data = vec![0u8; padded_width * padded_height];
        for y in 0..grid.height() {
            let start = (y + pad) * padded_width + pad;
            data[start..start + grid.width()].copy_from_slice(grid.row(y));
        }
        PaddedGrid { data, padded_width }
    }

    /// Copy the size x size window centered on output position
    /// `(x, y)` into `buf`, row by row in scan order.
    ///
    /// With `pad = size / 2`, the window's top-left corner in padded
    /// coordinates is exactly `(x, y)`, so no per-window bounds
    /// arithmetic is needed beyond the padding itself.
    pub(crate) fn window_into(&self, x: usize, y: usize, size: usize, buf: &mut Vec<u8>) {
        buf.clear();
        for wy in 0..size {
            let row_start = (y + wy) * self.padded_width + x;
            buf.extend_from_slice(&self.data[row_start..row_start + size]);
        }
    }
}

/// Run a size x size windowed reduction over the whole grid.
///
/// The reduction receives the window contents in scan order and may
/// reorder them freely (the buffer is refilled for every position).
fn reduce_windows<F>(grid: &IntensityGrid, size: usize, mut reduce: F) -> IntensityGrid
where
    F: FnMut(&mut [u8]) -> u8,
{
    if grid.is_empty() {
        return grid.clone();
    }

    let padded = PaddedGrid::new(grid, size / 2);
    let mut out = IntensityGrid::new(grid.width(), grid.height());
    let mut window = Vec::with_capacity(size * size);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            padded.window_into(x, y, size, &mut window);
            out.set(x, y, reduce(&mut window));
        }
    }
    out
}

/// Median filter: each output sample is the median of its size x size
/// neighborhood. Robust to impulse noise and preserves edges better
/// than the mean.
pub fn median_filter(grid: &IntensityGrid, size: usize) -> Result<IntensityGrid, String> {
    check_filter_size(size)?;
    Ok(reduce_windows(grid, size, |window| {
        window.sort_unstable();
        window[window.len() / 2]
    }))
}

/// Mean filter: arithmetic mean of the neighborhood, truncated to an
/// integer. Uniform blur.
pub fn mean_filter(grid: &IntensityGrid, size: usize) -> Result<IntensityGrid, String> {
    check_filter_size(size)?;
    let window_samples = (size * size) as u32;
    Ok(reduce_windows(grid, size, |window| {
        let sum: u32 = window.iter().map(|&v| v as u32).sum();
        (sum / window_samples) as u8
    }))
}

/// Weighted mean filter over the fixed [`WEIGHTED_MEAN_KERNEL`],
/// truncated to an integer. A cheap approximation of Gaussian
/// smoothing; the neighborhood is fixed at 3x3.
pub fn weighted_mean_filter(grid: &IntensityGrid) -> IntensityGrid {
    reduce_windows(grid, 3, |window| {
        let mut acc = 0u32;
        for (i, &v) in window.iter().enumerate() {
            acc += WEIGHTED_MEAN_KERNEL[i / 3][i % 3] * v as u32;
        }
        (acc / WEIGHTED_MEAN_KERNEL_SUM) as u8
    })
}
