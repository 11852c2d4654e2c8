//! Data models shared across the library.

mod operation;
mod preset;

pub use operation::{default_filter_size, Operation};
pub use preset::OperationPreset;
