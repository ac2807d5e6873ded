//! Command Line Interface (CLI) layer for DITLAUNCH.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for planning and executing a
//! launch. It wires user-provided options to the underlying library
//! functionality exposed via `ditlaunch::api`.
//!
//! If you are embedding DITLAUNCH into another application, prefer using
//! the high-level `ditlaunch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
