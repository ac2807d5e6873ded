use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::core::params::LaunchParams;

/// Errors encountered when reading or writing launch presets
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a `LaunchParams` preset from a JSON file.
///
/// The loaded values replace the built-in defaults; explicit CLI flags
/// still win over the preset.
pub fn load_preset(path: &Path) -> Result<LaunchParams, PresetError> {
    let contents = fs::read_to_string(path)?;
    let params: LaunchParams = serde_json::from_str(&contents)?;
    info!("Loaded launch preset from {}", path.display());
    Ok(params)
}

/// Write a `LaunchParams` preset as pretty-printed JSON
pub fn save_preset(path: &Path, params: &LaunchParams) -> Result<(), PresetError> {
    let contents = serde_json::to_string_pretty(params)?;
    fs::write(path, contents)?;
    info!("Saved launch preset to {}", path.display());
    Ok(())
}
