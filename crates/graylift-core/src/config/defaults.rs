//! Built-in parameter defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default operation parameters, overridable from `graylift.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Neighborhood size for the spatial filters.
    #[serde(default = "default_filter_size")]
    pub filter_size: usize,

    /// Power-law exponent.
    #[serde(default = "default_gamma")]
    pub gamma: f32,

    /// Neighbor count for the adaptive mean filter.
    #[serde(default = "default_k")]
    pub k: usize,

    /// Coherence deviation threshold for the adaptive mean filter.
    #[serde(default = "default_theta")]
    pub theta: f32,

    /// Base directory for persisted input/output pairs.
    #[serde(default = "default_pairs_dir")]
    pub pairs_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            filter_size: default_filter_size(),
            gamma: default_gamma(),
            k: default_k(),
            theta: default_theta(),
            pairs_dir: default_pairs_dir(),
        }
    }
}

fn default_filter_size() -> usize {
    3
}

fn default_gamma() -> f32 {
    1.0
}

fn default_k() -> usize {
    5
}

fn default_theta() -> f32 {
    10.0
}

fn default_pairs_dir() -> PathBuf {
    PathBuf::from("data")
}
