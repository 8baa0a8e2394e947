use crate::error::Result;
use crate::{io, paths};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// User settings persisted at `config/settings.json`: the pinned favorite
/// sensitivity and the random range bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_main_sensitivity")]
    pub main_sensitivity: f64,
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,
}

fn default_main_sensitivity() -> f64 {
    1.0
}

fn default_lower_bound() -> f64 {
    0.7
}

fn default_upper_bound() -> f64 {
    2.1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            main_sensitivity: default_main_sensitivity(),
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when no file exists yet.
    /// The file is only created once a `set-*` command saves.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::settings_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::settings_path(root);
        let data = serde_json::to_string_pretty(self)?;
        io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
