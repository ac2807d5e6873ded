//! I/O layer for launch presets.
//! Provides JSON load/save for `LaunchParams` so recurring runs can be
//! captured in a file and overridden per invocation.
pub mod preset;
pub use preset::{PresetError, load_preset, save_preset};
