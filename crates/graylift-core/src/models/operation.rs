//! Enhancement operation identifiers and their parameters.

use serde::{Deserialize, Serialize};

/// One enhancement operation with its strongly-typed parameters.
///
/// This is the single dispatch currency of the kernel: callers build a
/// variant, [`crate::kernel::apply`] validates the parameters and runs
/// the matching transform. The serde representation tags the variant
/// with an `op` field so presets read naturally:
///
/// ```yaml
/// op: knn-mean
/// size: 3
/// k: 5
/// theta: 12.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    /// Invert brightness: f(x) = 1 - x in normalized space.
    Negative,

    /// Binarize: samples below `level` go to 0, samples at or above it
    /// go to 255.
    Threshold { level: u8 },

    /// Logarithmic stretch scaled by the grid's own maximum.
    Log,

    /// Exponential companion of the log stretch. The scale constant is
    /// recomputed from the input grid's own maximum, so applying it to
    /// a log-transformed grid is not an exact round trip.
    InverseLog,

    /// Power-law (gamma) mapping: x^gamma in normalized space.
    /// gamma < 1 brightens, gamma > 1 darkens.
    PowerLaw { gamma: f32 },

    /// Global histogram equalization.
    Equalize,

    /// Median of a size x size neighborhood.
    Median {
        #[serde(default = "default_filter_size")]
        size: usize,
    },

    /// Arithmetic mean of a size x size neighborhood, truncated.
    Mean {
        #[serde(default = "default_filter_size")]
        size: usize,
    },

    /// Weighted mean over the fixed normalized 3x3 kernel
    /// [[1,2,1],[2,4,2],[1,2,1]] / 16.
    WeightedMean,

    /// Adaptive k-nearest-intensity-neighbor mean. Replaces the center
    /// sample with the mean of the k intensity-nearest window samples
    /// when the neighborhood deviates from that mean by at least
    /// `theta`; coherent neighborhoods are zeroed.
    KnnMean {
        #[serde(default = "default_filter_size")]
        size: usize,
        k: usize,
        theta: f32,
    },
}

impl Operation {
    /// Stable identifier for this operation, matching the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Negative => "negative",
            Operation::Threshold { .. } => "threshold",
            Operation::Log => "log",
            Operation::InverseLog => "inverse-log",
            Operation::PowerLaw { .. } => "power-law",
            Operation::Equalize => "equalize",
            Operation::Median { .. } => "median",
            Operation::Mean { .. } => "mean",
            Operation::WeightedMean => "weighted-mean",
            Operation::KnnMean { .. } => "knn-mean",
        }
    }
}

/// Default neighborhood size for the spatial filters.
pub fn default_filter_size() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_match_serde_tags() {
        let cases = [
            (Operation::Negative, "negative"),
            (Operation::Threshold { level: 128 }, "threshold"),
            (Operation::Log, "log"),
            (Operation::InverseLog, "inverse-log"),
            (Operation::PowerLaw { gamma: 2.2 }, "power-law"),
            (Operation::Equalize, "equalize"),
            (Operation::Median { size: 3 }, "median"),
            (Operation::Mean { size: 3 }, "mean"),
            (Operation::WeightedMean, "weighted-mean"),
            (
                Operation::KnnMean {
                    size: 3,
                    k: 5,
                    theta: 10.0,
                },
                "knn-mean",
            ),
        ];
        for (op, expected) in cases {
            assert_eq!(op.name(), expected);
            let yaml = serde_yaml::to_string(&op).expect("serializable operation");
            assert!(
                yaml.contains(&format!("op: {}", expected)),
                "serde tag mismatch for {expected}: {yaml}"
            );
        }
    }

    #[test]
    fn test_operation_deserializes_with_default_size() {
        let op: Operation = serde_yaml::from_str("op: median").expect("valid yaml");
        assert_eq!(op, Operation::Median { size: 3 });

        let op: Operation =
            serde_yaml::from_str("op: knn-mean\nk: 4\ntheta: 8.0").expect("valid yaml");
        assert_eq!(
            op,
            Operation::KnnMean {
                size: 3,
                k: 4,
                theta: 8.0
            }
        );
    }

    #[test]
    fn test_operation_roundtrip() {
        let op = Operation::KnnMean {
            size: 5,
            k: 9,
            theta: 15.5,
        };
        let yaml = serde_yaml::to_string(&op).expect("serializable");
        let back: Operation = serde_yaml::from_str(&yaml).expect("deserializable");
        assert_eq!(op, back);
    }
}
