use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid GPU count: {value}. Must be a positive integer")]
    InvalidGpuCount { value: u32 },

    #[error("Preset error: {0}")]
    Preset(#[from] ditlaunch::io::PresetError),
}
