#![doc = r#"
DITLAUNCH — a distributed-training launcher for DiT video-diffusion runs.

This crate assembles and executes the `torchrun` command line for a
multi-GPU DiT training run: typed launch parameters, minute-granularity run
namespacing for checkpoint and tensorboard directories, executable-relative
launch-root resolution, and exit-status propagation from the delegated
trainer. It powers the DITLAUNCH CLI and can be embedded in your own Rust
applications.

Scope
-----
The training program itself is external; DITLAUNCH never inspects dataset
shards, talks to GPUs, or parses trainer output. Its contract is the command
line it constructs and the exit status it forwards.

Add dependency
--------------
```toml
[dependencies]
ditlaunch = "0.1"
```

Quick start: plan a launch without side effects
-----------------------------------------------
```rust
use chrono::{Local, TimeZone};
use ditlaunch::{LaunchParams, plan_launch};

fn main() -> ditlaunch::Result<()> {
    let params = LaunchParams::default();
    let now = Local.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();

    let plan = plan_launch(&params, now)?;
    assert_eq!(plan.run_id.as_str(), "2024-01-01-10-30");
    println!("{}", plan.command.render());
    Ok(())
}
```

Execute a launch
----------------
```rust,no_run
use ditlaunch::{LaunchParams, launch};

fn main() -> ditlaunch::Result<()> {
    let params = LaunchParams {
        gpus: 4,
        ..Default::default()
    };

    // Enters the launch root (parent of the executable's directory unless
    // overridden), stamps the run, spawns torchrun, and waits.
    let code = launch(&params, None)?;
    std::process::exit(code);
}
```

Presets
-------
```rust,no_run
use std::path::Path;
use ditlaunch::io::{load_preset, save_preset};
use ditlaunch::LaunchParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LaunchParams { gpus: 2, ..Default::default() };
    save_preset(Path::new("night-run.json"), &params)?;

    let restored = load_preset(Path::new("night-run.json"))?;
    assert_eq!(restored.gpus, 2);
    Ok(())
}
```

Error handling
--------------
All public functions return `ditlaunch::Result<T>`; match on
`ditlaunch::Error` to handle specific cases, e.g. a missing launcher binary
or an unreachable launch root.

```rust,no_run
use ditlaunch::{Error, LaunchParams, launch};

fn main() {
    match launch(&LaunchParams::default(), None) {
        Ok(code) => std::process::exit(code),
        Err(Error::LauncherNotFound { program }) => {
            eprintln!("{program} is not installed or not on PATH")
        }
        Err(other) => eprintln!("Launch failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — trainer-facing enums (`DitModel`, `ModelArch`, `Compressor`, `SeqParallelMode`).
- [`io`] — JSON launch presets.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{LaunchParams, default_datasets};
pub use error::{Error, Result};
pub use types::{Compressor, DitModel, ModelArch, SeqParallelMode};

// Launch primitives
pub use crate::core::launch::command::LaunchCommand;
pub use crate::core::launch::run_id::{RUN_ID_FORMAT, RunId, RunPaths};

// Preset helpers
pub use io::preset::{PresetError, load_preset, save_preset};

// High-level API re-exports
pub use api::{LaunchPlan, launch, plan_launch, resolve_launch_root};
