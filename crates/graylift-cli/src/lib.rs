//! Shared utilities for graylift-cli
//!
//! Reusable pieces of the command-line front end: operation parsing,
//! argument-to-operation building, input expansion, and the
//! input/output pair persistence used by the apply command.

pub mod builders;
pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use builders::{build_operation, OperationArgs};
pub use parsers::{parse_operation, OPERATION_NAMES};
pub use processing::{
    determine_output_path, expand_inputs, process_single_image, save_pair, ProcessOutcome,
    SUPPORTED_EXTENSIONS,
};
