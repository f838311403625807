//! Demo configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces
//! the stock three-item run.

use crate::error::DemoError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SEED: [&str; 3] = ["Learn Go", "Understand goroutines", "Build a web service"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Texts added to the collection, in order.
    pub seed: Vec<String>,
    /// Identifier toggled before processing.
    pub toggle_id: u32,
    /// Simulated work per item, in milliseconds.
    pub delay_ms: u64,
    /// Colour the status markers in the listing.
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            seed: DEFAULT_SEED.iter().map(|s| s.to_string()).collect(),
            toggle_id: 1,
            delay_ms: 100,
            color: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = fs::read_to_string(path).map_err(|err| DemoError::config(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
