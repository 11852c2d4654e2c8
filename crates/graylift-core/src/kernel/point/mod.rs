//! Point transforms
//!
//! Per-sample, context-free mappings. Each transform reads one input
//! sample and produces one output sample; the only whole-grid state is
//! the log family's scale constant, computed once per call from the
//! input's own maximum.


use crate::grid::IntensityGrid;

/// Build an output grid by mapping every sample through `f`.
fn map_samples<F>(grid: &IntensityGrid, f: F) -> IntensityGrid
where
    F: Fn(u8) -> u8,
{
    let data: Vec<u8> = grid.as_slice().iter().map(|&v| f(v)).collect();
    IntensityGrid::from_parts(grid.width(), grid.height(), data)
}

/// Log-family scale constant: 255 / ln(1 + max), from the grid's own
/// maximum. `None` for an all-zero (or empty) grid, where the
/// denominator ln(1) would be zero.
fn log_scale(grid: &IntensityGrid) -> Option<f32> {
    let max = grid.as_slice().iter().copied().max().unwrap_or(0);
    if max == 0 {
        return None;
    }
    Some(255.0 / (1.0 + max as f32).ln())
}

/// Invert brightness.
///
/// Normalizes to [0, 1], maps x to 1 - x, clamps, rescales to
/// [0, 255] and rounds. Involutive up to rounding.
pub fn negative(grid: &IntensityGrid) -> IntensityGrid {
    map_samples(grid, |v| {
        let x = v as f32 / 255.0;
        ((1.0 - x).clamp(0.0, 1.0) * 255.0).round() as u8
    })
}

/// Binarize against `level`.
///
/// Samples below `level` map to 0; samples at or above it map to 255.
/// The boundary value itself takes the upper branch.
pub fn threshold(grid: &IntensityGrid, level: u8) -> IntensityGrid {
    map_samples(grid, |v| if v < level { 0 } else { 255 })
}

/// Logarithmic stretch.
///
/// f(x) = c * ln(1 + x) with c = 255 / ln(1 + max) computed once over
/// the whole grid, so the brightest input sample lands on 255. The
/// mapping is monotonic and bounded by construction.
///
/// An all-zero grid is a fixed point: with max = 0 the scale's
/// denominator ln(1) is zero, so the grid is returned unchanged
/// instead of producing non-finite samples.
pub fn log_transform(grid: &IntensityGrid) -> IntensityGrid {
    let scale = match log_scale(grid) {
        Some(scale) => scale,
        None => return grid.clone(),
    };
    map_samples(grid, |v| {
        (scale * (1.0 + v as f32).ln()).round().clamp(0.0, 255.0) as u8
    })
}

/// Exponential companion of [`log_transform`].
///
/// f(x) = exp(x / c) - 1, clamped to [0, 255] and rounded, with c
/// recomputed from the *input* grid's own maximum. Because the scale
/// is not carried over from whatever grid produced the input, chaining
/// `log_transform` then `inverse_log_transform` is not an exact round
/// trip for arbitrary images; both functions are self-contained per
/// call by design.
///
/// An all-zero grid is returned unchanged, as in [`log_transform`].
pub fn inverse_log_transform(grid: &IntensityGrid) -> IntensityGrid {
    let scale = match log_scale(grid) {
        Some(scale) => scale,
        None => return grid.clone(),
    };
    map_samples(grid, |v| {
        ((v as f32 / scale).exp() - 1.0).clamp(0.0, 255.0).round() as u8
    })
}

/// Power-law (gamma) mapping.
///
/// Normalizes to [0, 1], raises to `gamma`, clamps, rescales to
/// [0, 255] and rounds. gamma < 1 brightens, gamma > 1 darkens,
/// gamma = 1 is the identity up to rounding.
///
/// The transform itself is total over any `gamma`; the kernel's
/// dispatch layer rejects non-positive or non-finite exponents before
/// calling it.
pub fn power_law(grid: &IntensityGrid, gamma: f32) -> IntensityGrid {
    map_samples(grid, |v| {
        let x = v as f32 / 255.0;
        (x.powf(gamma).clamp(0.0, 1.0) * 255.0).round() as u8
    })
}
