//! Core launch building blocks: typed parameters, run namespacing,
//! working-directory resolution, command assembly, and spawning. These are
//! internal primitives consumed by the high-level `api` module.
pub mod launch;
pub mod params;
