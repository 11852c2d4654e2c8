//! Named operation presets.

use serde::{Deserialize, Serialize};

use super::Operation;

/// A named, reusable operation with parameters baked in.
///
/// Stored as YAML; the operation fields are flattened so a preset file
/// reads as one flat document:
///
/// ```yaml
/// name: soft-denoise
/// description: Gentle impulse-noise cleanup for scanned documents
/// op: knn-mean
/// size: 3
/// k: 5
/// theta: 12.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationPreset {
    /// Preset name shown in listings.
    pub name: String,

    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The operation this preset applies.
    #[serde(flatten)]
    pub operation: Operation,
}
