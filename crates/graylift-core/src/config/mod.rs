//! Runtime configuration
//!
//! Provides the global verbose flag, the `verbose_println!` macro, and
//! loading of optional on-disk defaults for operation parameters.

mod defaults;

pub use defaults::Defaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Candidate config file names searched in the working directory.
const CONFIG_FILENAMES: &[&str] = &["graylift.yml", "graylift.yaml"];

/// Loaded configuration, its source path, and any warnings produced
/// while reading it.
pub struct ConfigHandle {
    pub defaults: Defaults,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

static CONFIG: OnceLock<ConfigHandle> = OnceLock::new();

/// The process-wide defaults, loaded once from disk on first use.
///
/// Falls back to built-in defaults when no config file exists or a
/// file fails to parse (the parse error is kept as a warning rather
/// than aborting the run).
pub fn defaults() -> &'static ConfigHandle {
    CONFIG.get_or_init(load_from_disk)
}

/// Report where the active defaults came from, via `verbose_println!`.
pub fn log_config_usage() {
    let handle = defaults();
    match &handle.source {
        Some(path) => verbose_println!("Using defaults from {}", path.display()),
        None => verbose_println!("Using built-in defaults"),
    }
    for warning in &handle.warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn load_from_disk() -> ConfigHandle {
    for name in CONFIG_FILENAMES {
        let path = Path::new(name);
        if !path.is_file() {
            continue;
        }
        match read_defaults(path) {
            Ok(defaults) => {
                return ConfigHandle {
                    defaults,
                    source: Some(path.to_path_buf()),
                    warnings: Vec::new(),
                }
            }
            Err(e) => {
                return ConfigHandle {
                    defaults: Defaults::default(),
                    source: None,
                    warnings: vec![format!(
                        "Ignoring config file {}: {}",
                        path.display(),
                        e
                    )],
                }
            }
        }
    }
    ConfigHandle {
        defaults: Defaults::default(),
        source: None,
        warnings: Vec::new(),
    }
}

/// Parse a defaults file.
pub fn read_defaults<P: AsRef<Path>>(path: P) -> Result<Defaults, String> {
    let contents = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read config file: {}", e))?;
    serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
}
