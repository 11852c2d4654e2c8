//! Operation name parsing.

use graylift_core::config::Defaults;
use graylift_core::models::Operation;

use crate::builders::OperationArgs;

/// Canonical operation identifiers, as accepted by `--op`.
pub const OPERATION_NAMES: &[&str] = &[
    "negative",
    "threshold",
    "log",
    "inverse-log",
    "power-law",
    "equalize",
    "median",
    "mean",
    "weighted-mean",
    "knn-mean",
];

/// Parse an operation from its name plus whatever parameter flags were
/// given, filling gaps from the loaded defaults.
///
/// Accepted names (with aliases):
/// - "negative" / "invert"
/// - "threshold" (requires --level)
/// - "log" / "log-transform"
/// - "inverse-log" / "inverse-log-transform"
/// - "power-law" / "gamma" (--gamma, default from config)
/// - "equalize" / "histeq"
/// - "median" / "median-filter" (--size)
/// - "mean" / "mean-filter" (--size)
/// - "weighted-mean" / "gaussian"
/// - "knn-mean" / "knn" / "adaptive-mean" (--size, --k, --theta)
pub fn parse_operation(
    name: &str,
    args: &OperationArgs,
    defaults: &Defaults,
) -> Result<Operation, String> {
    let operation = match name.to_lowercase().as_str() {
        "negative" | "invert" => Operation::Negative,
        "threshold" => Operation::Threshold {
            level: args
                .level
                .ok_or_else(|| "threshold requires --level <0-255>".to_string())?,
        },
        "log" | "log-transform" => Operation::Log,
        "inverse-log" | "inverse-log-transform" => Operation::InverseLog,
        "power-law" | "gamma" => Operation::PowerLaw {
            gamma: args.gamma.unwrap_or(defaults.gamma),
        },
        "equalize" | "histeq" | "histogram-equalization" => Operation::Equalize,
        "median" | "median-filter" => Operation::Median {
            size: args.size.unwrap_or(defaults.filter_size),
        },
        "mean" | "mean-filter" => Operation::Mean {
            size: args.size.unwrap_or(defaults.filter_size),
        },
        "weighted-mean" | "weighted-mean-filter" | "gaussian" => Operation::WeightedMean,
        "knn-mean" | "knn" | "adaptive-mean" => Operation::KnnMean {
            size: args.size.unwrap_or(defaults.filter_size),
            k: args.k.unwrap_or(defaults.k),
            theta: args.theta.unwrap_or(defaults.theta),
        },
        _ => {
            return Err(format!(
                "Unknown operation: '{}'. Valid options: {}",
                name,
                OPERATION_NAMES.join(", ")
            ))
        }
    };
    Ok(operation)
}
