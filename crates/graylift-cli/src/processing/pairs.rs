//! Timestamped input/output pair persistence.
//!
//! Every apply run can archive what went in and what came out:
//! `<base>/<timestamp>/input.png` and `output.png`, one directory per
//! run, named with microsecond resolution so concurrent batch workers
//! land in distinct directories.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use graylift_core::exporters::export_gray8;
use graylift_core::IntensityGrid;

/// Persist an input/output grid pair under a fresh timestamped
/// directory inside `base_dir`. Returns the created directory.
pub fn save_pair(
    input: &IntensityGrid,
    output: &IntensityGrid,
    base_dir: &Path,
) -> Result<PathBuf, String> {
    std::fs::create_dir_all(base_dir).map_err(|e| {
        format!(
            "Failed to create pairs directory {}: {}",
            base_dir.display(),
            e
        )
    })?;

    let folder = create_unique_pair_dir(base_dir)?;
    export_gray8(input, folder.join("input.png"))?;
    export_gray8(output, folder.join("output.png"))?;
    Ok(folder)
}

/// Create a run directory named from the current time with microsecond
/// resolution. On a (rare) collision, a numeric suffix is appended
/// until creation succeeds.
fn create_unique_pair_dir(base_dir: &Path) -> Result<PathBuf, String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| format!("System clock is before the Unix epoch: {}", e))?;
    let stamp = format!("{}{:06}", now.as_secs(), now.subsec_micros());

    let mut suffix = 0u32;
    loop {
        let name = if suffix == 0 {
            stamp.clone()
        } else {
            format!("{}_{}", stamp, suffix)
        };
        let folder = base_dir.join(name);
        match std::fs::create_dir(&folder) {
            Ok(()) => return Ok(folder),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                suffix += 1;
            }
            Err(e) => {
                return Err(format!(
                    "Failed to create pair directory {}: {}",
                    folder.display(),
                    e
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid(value: u8) -> IntensityGrid {
        IntensityGrid::from_vec(2, 2, vec![value; 4]).expect("test grid dimensions")
    }

    #[test]
    fn test_save_pair_writes_both_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let folder =
            save_pair(&small_grid(10), &small_grid(200), dir.path()).expect("savable pair");

        assert!(folder.starts_with(dir.path()));
        assert!(folder.join("input.png").is_file());
        assert!(folder.join("output.png").is_file());
    }

    #[test]
    fn test_save_pair_directories_are_unique() {
        let dir = tempfile::tempdir().expect("temp dir");
        let a = save_pair(&small_grid(1), &small_grid(2), dir.path()).expect("first pair");
        let b = save_pair(&small_grid(3), &small_grid(4), dir.path()).expect("second pair");
        assert_ne!(a, b, "two runs must never share a pair directory");
    }
}
