//! Operation building from command-line input.

use std::path::Path;

use graylift_core::config::Defaults;
use graylift_core::models::Operation;
use graylift_core::{kernel, presets};

use crate::parsers::parse_operation;

/// Raw parameter flags collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct OperationArgs {
    /// Threshold level (0-255).
    pub level: Option<u8>,
    /// Power-law exponent.
    pub gamma: Option<f32>,
    /// Spatial filter neighborhood size.
    pub size: Option<usize>,
    /// Adaptive filter neighbor count.
    pub k: Option<usize>,
    /// Adaptive filter deviation threshold.
    pub theta: Option<f32>,
}

/// Resolve the operation to run from `--op`/`--preset` plus parameter
/// flags, validating the final parameter set.
pub fn build_operation(
    op_name: Option<&str>,
    preset_path: Option<&Path>,
    args: &OperationArgs,
    defaults: &Defaults,
) -> Result<Operation, String> {
    let operation = match (op_name, preset_path) {
        (Some(_), Some(_)) => {
            return Err("Specify either --op or --preset, not both".to_string());
        }
        (Some(name), None) => parse_operation(name, args, defaults)?,
        (None, Some(path)) => presets::load_operation_preset(path)?.operation,
        (None, None) => {
            return Err("An operation is required: pass --op <NAME> or --preset <FILE>".to_string());
        }
    };

    kernel::validate_operation(&operation)?;
    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_op_name() {
        let defaults = Defaults::default();
        let args = OperationArgs {
            gamma: Some(2.2),
            ..Default::default()
        };
        let op = build_operation(Some("power-law"), None, &args, &defaults).expect("buildable");
        assert_eq!(op, Operation::PowerLaw { gamma: 2.2 });
    }

    #[test]
    fn test_build_from_preset_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("denoise.yml");
        std::fs::write(&path, "name: denoise\nop: knn-mean\nk: 4\ntheta: 8.0\n")
            .expect("write preset");

        let defaults = Defaults::default();
        let op = build_operation(None, Some(&path), &OperationArgs::default(), &defaults)
            .expect("buildable");
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
    fn test_build_rejects_both_sources() {
        let defaults = Defaults::default();
        let result = build_operation(
            Some("negative"),
            Some(Path::new("p.yml")),
            &OperationArgs::default(),
            &defaults,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not both"));
    }

    #[test]
    fn test_build_rejects_neither_source() {
        let defaults = Defaults::default();
        let result = build_operation(None, None, &OperationArgs::default(), &defaults);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_validates_parameters() {
        let defaults = Defaults::default();
        let args = OperationArgs {
            size: Some(4),
            ..Default::default()
        };
        let result = build_operation(Some("median"), None, &args, &defaults);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("odd"));
    }
}
