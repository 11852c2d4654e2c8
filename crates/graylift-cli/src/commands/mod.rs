//! Command implementations for the graylift binary.

mod analyze;
mod apply;
mod preset;

pub use analyze::cmd_analyze;
pub use apply::cmd_apply;
pub use preset::{cmd_preset_list, cmd_preset_save, cmd_preset_show};
