//! Preset management commands.

use std::path::PathBuf;

use graylift_core::config;
use graylift_core::models::OperationPreset;
use graylift_core::presets::{load_operation_preset, save_operation_preset};

use graylift_cli::{build_operation, OperationArgs};

/// List presets found in a directory (default: ./presets).
pub fn cmd_preset_list(dir: Option<PathBuf>) -> Result<(), String> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("presets"));
    if !dir.is_dir() {
        println!("No preset directory at {}", dir.display());
        return Ok(());
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .map_err(|e| format!("Failed to read preset directory {}: {}", dir.display(), e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("yml") | Some("yaml")
            )
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        println!("No presets found in {}", dir.display());
        return Ok(());
    }

    println!("Presets in {}:", dir.display());
    for path in paths {
        match load_operation_preset(&path) {
            Ok(preset) => {
                let description = preset.description.as_deref().unwrap_or("-");
                println!(
                    "  {:<20} {:<14} {}",
                    preset.name,
                    preset.operation.name(),
                    description
                );
            }
            Err(e) => println!("  {} (unreadable: {})", path.display(), e),
        }
    }
    Ok(())
}

/// Show a single preset file in detail.
pub fn cmd_preset_show(preset_path: PathBuf) -> Result<(), String> {
    let preset = load_operation_preset(&preset_path)?;
    println!("Preset: {}", preset.name);
    if let Some(description) = &preset.description {
        println!("Description: {}", description);
    }
    println!("Operation: {}", preset.operation.name());
    println!("Parameters: {:?}", preset.operation);
    Ok(())
}

/// Build a preset from command-line flags and write it to a file.
pub fn cmd_preset_save(
    output: PathBuf,
    name: String,
    description: Option<String>,
    op: String,
    args: OperationArgs,
) -> Result<(), String> {
    let defaults = &config::defaults().defaults;
    let operation = build_operation(Some(&op), None, &args, defaults)?;

    let preset = OperationPreset {
        name,
        description,
        operation,
    };
    save_operation_preset(&preset, &output)?;
    println!("Preset '{}' saved to {}", preset.name, output.display());
    Ok(())
}
