//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Determine the output path for an enhanced image.
///
/// If `out` is a directory, the result goes there as
/// `<stem>_<operation>.png`; if it is a file path, it is used as-is.
/// Without `out`, the result lands next to the input.
pub fn determine_output_path(
    input: &Path,
    out: &Option<PathBuf>,
    operation_name: &str,
) -> Result<PathBuf, String> {
    let filename = input
        .file_stem()
        .ok_or("Invalid input filename")?
        .to_string_lossy();
    let result_name = format!("{}_{}.png", filename, operation_name);

    if let Some(out_path) = out {
        if out_path.is_dir() {
            Ok(out_path.join(result_name))
        } else {
            Ok(out_path.clone())
        }
    } else {
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(result_name))
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files (.png, .jpg, .jpeg).
/// If `recursive` is true, subdirectories are also scanned.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }
    Ok(())
}
