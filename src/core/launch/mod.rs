//! Launch building blocks: run identifiers, root resolution, command
//! assembly, and process execution. These are internal primitives
//! consumed by the high-level `api` module.
pub mod command;
pub mod run_id;
pub mod spawn;
pub mod workdir;
