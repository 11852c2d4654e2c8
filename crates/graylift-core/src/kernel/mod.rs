//! Grayscale enhancement kernel
//!
//! Pure, stateless transforms over [`IntensityGrid`]s. Three families:
//!
//! - `point`: per-sample, context-free mappings (negative, threshold,
//!   log / inverse-log, power-law)
//! - `equalize`: global histogram equalization
//! - `spatial`: sliding-window neighborhood filters over a zero-padded
//!   copy of the input (median, mean, weighted mean, adaptive
//!   k-nearest-intensity-neighbor mean)
//!
//! Every operation allocates a fresh output grid of the input's shape;
//! nothing is cached between calls and no input is ever mutated, so
//! independent invocations can run concurrently without coordination.

mod equalize;
mod point;
mod spatial;


// Re-export public items from submodules
pub use equalize::{cumulative, equalize_histogram, histogram, HISTOGRAM_BUCKETS};
pub use point::{inverse_log_transform, log_transform, negative, power_law, threshold};
pub use spatial::{
    knn_mean_filter, mean_filter, median_filter, weighted_mean_filter, WEIGHTED_MEAN_KERNEL,
    WEIGHTED_MEAN_KERNEL_SUM,
};

use crate::grid::IntensityGrid;
use crate::models::Operation;

/// Apply one enhancement operation to a grid.
///
/// The single polymorphic entry point: validates the operation's
/// parameters, then dispatches to the matching transform. The output
/// grid always has the input's shape.
pub fn apply(grid: &IntensityGrid, operation: &Operation) -> Result<IntensityGrid, String> {
    validate_operation(operation)?;

    let output = match operation {
        Operation::Negative => point::negative(grid),
        Operation::Threshold { level } => point::threshold(grid, *level),
        Operation::Log => point::log_transform(grid),
        Operation::InverseLog => point::inverse_log_transform(grid),
        Operation::PowerLaw { gamma } => point::power_law(grid, *gamma),
        Operation::Equalize => equalize::equalize_histogram(grid),
        Operation::Median { size } => spatial::median_filter(grid, *size)?,
        Operation::Mean { size } => spatial::mean_filter(grid, *size)?,
        Operation::WeightedMean => spatial::weighted_mean_filter(grid),
        Operation::KnnMean { size, k, theta } => {
            spatial::knn_mean_filter(grid, *size, *k, *theta)?
        }
    };

    Ok(output)
}

/// Check an operation's parameters without running it.
///
/// Useful for front ends that want to reject bad parameters before
/// decoding a potentially large image.
pub fn validate_operation(operation: &Operation) -> Result<(), String> {
    match operation {
        Operation::PowerLaw { gamma } => {
            if !gamma.is_finite() || *gamma <= 0.0 {
                return Err(format!(
                    "gamma must be a positive finite value, got {}",
                    gamma
                ));
            }
            Ok(())
        }
        Operation::Median { size } | Operation::Mean { size } => spatial::check_filter_size(*size),
        Operation::KnnMean { size, k, theta } => {
            spatial::check_filter_size(*size)?;
            spatial::check_knn_params(*size, *k, *theta)
        }
        // Threshold's level is a u8, so its [0, 255] domain is
        // enforced by the type; the remaining operations take no
        // parameters.
        _ => Ok(()),
    }
}
