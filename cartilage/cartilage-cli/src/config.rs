//! JSON parameter file.
//!
//! Every section and every field is optional; anything the file leaves out
//! falls back to the built-in defaults, so `{}` is a valid config.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use cartilage_pipeline::{HipParams, SeamJointParams};
use serde::Deserialize;

/// Per-joint parameter sections.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hip pipeline parameters.
    pub hip: HipParams,
    /// Sacroiliac pipeline parameters.
    pub sacroiliac: SeamJointParams,
    /// Pubic pipeline parameters.
    pub pubic: SeamJointParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hip: HipParams::default(),
            sacroiliac: SeamJointParams::default(),
            // the interpubic disc keeps its perforations
            pubic: SeamJointParams {
                fill_gaps: false,
                ..SeamJointParams::default()
            },
        }
    }
}

impl Config {
    /// Load a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}
