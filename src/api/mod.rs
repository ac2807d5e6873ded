//! High-level, ergonomic library API: plan a launch in memory or execute it
//! end to end. Prefer these entrypoints over the low-level launch modules
//! when embedding DITLAUNCH.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::core::launch::command::{LaunchCommand, assemble};
use crate::core::launch::run_id::{RunId, RunPaths};
use crate::core::launch::{spawn, workdir};
use crate::core::params::LaunchParams;
use crate::error::Result;

/// A fully resolved launch: run id, output directories, and the exact
/// command line, with no side effects taken yet
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub run_id: RunId,
    pub paths: RunPaths,
    pub command: LaunchCommand,
}

/// Validate `params` and assemble the invocation for the given instant.
///
/// Pure: nothing is spawned and no directory is touched. This is the
/// dry-run surface, and the instant is explicit so planning is
/// deterministic under test.
pub fn plan_launch(params: &LaunchParams, now: DateTime<Local>) -> Result<LaunchPlan> {
    params.validate()?;
    let run_id = RunId::at(now);
    let paths = RunPaths::new(&params.checkpoint_root, &params.tensorboard_root, &run_id);
    let command = assemble(params, &paths);
    Ok(LaunchPlan {
        run_id,
        paths,
        command,
    })
}

/// Resolve the launch root: an explicit override wins, otherwise the
/// parent of the executable's directory.
pub fn resolve_launch_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => workdir::resolve_root(),
    }
}

/// Execute a launch end to end: validate, enter the launch root, stamp the
/// run from the wall clock, spawn the launcher, and wait.
///
/// Returns the child's exit code, which callers should forward unchanged.
pub fn launch(params: &LaunchParams, root: Option<&Path>) -> Result<i32> {
    let root = resolve_launch_root(root)?;
    workdir::enter_root(&root)?;
    let plan = plan_launch(params, Local::now())?;
    spawn::execute(&plan.command)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::error::Error;

    #[test]
    fn plan_is_pure_and_reproducible() {
        let now = Local.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();
        let params = LaunchParams::default();
        let a = plan_launch(&params, now).unwrap();
        let b = plan_launch(&params, now).unwrap();
        assert_eq!(a.command, b.command);
        assert_eq!(a.run_id.as_str(), "2024-01-01-10-30");
    }

    #[test]
    fn plan_rejects_invalid_params() {
        let now = Local.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();
        let params = LaunchParams {
            gpus: 0,
            ..Default::default()
        };
        assert!(matches!(
            plan_launch(&params, now),
            Err(Error::ZeroValue { arg: "gpus", .. })
        ));
    }

    #[test]
    fn explicit_root_override_wins() {
        let root = resolve_launch_root(Some(Path::new("/srv/train"))).unwrap();
        assert_eq!(root, PathBuf::from("/srv/train"));
    }
}
