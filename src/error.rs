//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and preset errors, and provides semantic variants
//! for parameter validation and launch failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preset error: {0}")]
    Preset(#[from] crate::io::PresetError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("{arg} must be greater than 0, got: {value}")]
    ZeroValue { arg: &'static str, value: u32 },

    #[error("Dataset shard list must not be empty")]
    EmptyDatasetList,

    #[error("Cannot resolve launch root from executable path: {path}")]
    RootResolution { path: PathBuf },

    #[error("Cannot enter launch root {root}: {source}")]
    EnterRoot {
        root: PathBuf,
        source: std::io::Error,
    },

    #[error("Launcher binary not found: {program}")]
    LauncherNotFound { program: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}
