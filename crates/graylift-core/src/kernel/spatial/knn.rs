//! Adaptive k-nearest-intensity-neighbor mean filter

use crate::grid::IntensityGrid;

use super::{check_filter_size, check_knn_params, PaddedGrid};

/// Adaptive mean filter over the k intensity-nearest window samples.
///
/// For every position, each sample of the size x size window is ranked
/// by absolute intensity distance to the *center* sample (a stable
/// sort, so equal distances keep window scan order and the earliest
/// position wins ties). The mean of the k nearest samples is computed;
/// if any window sample deviates from that mean by at least `theta`,
/// the output sample becomes the truncated mean.
///
/// When the whole neighborhood already sits within `theta` of the
/// mean, the output sample is left at its initialized default of 0 —
/// NOT the original center value. Coherent neighborhoods are zeroed.
/// This is intentional, load-bearing behavior verified by test; do not
/// "fix" it to a pass-through without reconfirming product intent.
pub fn knn_mean_filter(
    grid: &IntensityGrid,
    size: usize,
    k: usize,
    theta: f32,
) -> Result<IntensityGrid, String> {
    check_filter_size(size)?;
    check_knn_params(size, k, theta)?;

    if grid.is_empty() {
        return Ok(grid.clone());
    }

    let padded = PaddedGrid::new(grid, size / 2);
    let mut out = IntensityGrid::new(grid.width(), grid.height());
    let mut window: Vec<u8> = Vec::with_capacity(size * size);
    // (distance to center, sample), refilled per position
    let mut ranked: Vec<(u8, u8)> = Vec::with_capacity(size * size);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            padded.window_into(x, y, size, &mut window);
            let center = grid.get(x, y);

            ranked.clear();
            ranked.extend(window.iter().map(|&s| (center.abs_diff(s), s)));
            // Stable sort: equal distances keep scan order
            ranked.sort_by_key(|&(distance, _)| distance);

            let sum: u32 = ranked[..k].iter().map(|&(_, s)| s as u32).sum();
            let mean = sum as f32 / k as f32;

            let max_deviation = window
                .iter()
                .map(|&s| (mean - s as f32).abs())
                .fold(0.0f32, f32::max);

            if max_deviation >= theta {
                out.set(x, y, mean as u8);
            }
            // else: the neighborhood is coherent and the output sample
            // stays 0
        }
    }
    Ok(out)
}
