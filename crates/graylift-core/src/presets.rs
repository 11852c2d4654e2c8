//! Preset management
//!
//! Load, save, and validate named operation presets stored as YAML.

use std::path::Path;

use crate::models::OperationPreset;

/// Validate a preset name before using it to build a file path.
/// Rejects names containing path separators, "..", or other patterns
/// that could escape the preset directory.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }

    if name.contains('/') || name.contains('\\') {
        return Err("Preset name cannot contain path separators".to_string());
    }

    if name.contains("..") {
        return Err("Preset name cannot contain '..'".to_string());
    }

    if name.starts_with('.') {
        return Err("Preset name cannot start with '.'".to_string());
    }

    if name.contains('\0') {
        return Err("Preset name cannot contain null bytes".to_string());
    }

    Ok(())
}

/// Load an operation preset from a YAML file
pub fn load_operation_preset<P: AsRef<Path>>(path: P) -> Result<OperationPreset, String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read preset file {}: {}", path.display(), e))?;
    let preset: OperationPreset = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse preset file {}: {}", path.display(), e))?;
    validate_preset_name(&preset.name)?;
    crate::kernel::validate_operation(&preset.operation)
        .map_err(|e| format!("Preset '{}' carries invalid parameters: {}", preset.name, e))?;
    Ok(preset)
}

/// Save an operation preset to a YAML file
pub fn save_operation_preset<P: AsRef<Path>>(
    preset: &OperationPreset,
    path: P,
) -> Result<(), String> {
    validate_preset_name(&preset.name)?;
    crate::kernel::validate_operation(&preset.operation)
        .map_err(|e| format!("Preset '{}' carries invalid parameters: {}", preset.name, e))?;
    let yaml = serde_yaml::to_string(preset)
        .map_err(|e| format!("Failed to serialize preset: {}", e))?;
    std::fs::write(path.as_ref(), yaml).map_err(|e| {
        format!(
            "Failed to write preset file {}: {}",
            path.as_ref().display(),
            e
        )
    })?;
    Ok(())
}
