use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Timestamp layout used to namespace run artifacts, minute granularity
pub const RUN_ID_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// Identifier for one launch, derived once from the wall clock.
///
/// Both output directories of a run carry the same `RunId`; two runs
/// started in different minutes get distinct ones. Callers pass the
/// instant in, so derivation stays deterministic under test; only the
/// CLI edge reads the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl RunId {
    pub fn at(now: DateTime<Local>) -> Self {
        RunId(now.format(RUN_ID_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Run-scoped output directories, one per artifact kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub checkpoint_dir: PathBuf,
    pub tensorboard_dir: PathBuf,
}

impl RunPaths {
    /// Join the run id beneath the two artifact roots
    pub fn new(checkpoint_root: &Path, tensorboard_root: &Path, run_id: &RunId) -> Self {
        Self {
            checkpoint_dir: checkpoint_root.join(run_id.as_str()),
            tensorboard_dir: tensorboard_root.join(run_id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn run_id_uses_minute_granularity() {
        let id = RunId::at(at(2024, 1, 1, 10, 30));
        assert_eq!(id.as_str(), "2024-01-01-10-30");
    }

    #[test]
    fn run_id_zero_pads_components() {
        let id = RunId::at(at(2024, 3, 7, 9, 5));
        assert_eq!(id.as_str(), "2024-03-07-09-05");
    }

    #[test]
    fn runs_a_minute_apart_get_distinct_ids() {
        let a = RunId::at(at(2024, 1, 1, 10, 30));
        let b = RunId::at(at(2024, 1, 1, 10, 31));
        assert_ne!(a, b);
    }

    #[test]
    fn both_output_dirs_share_the_run_id() {
        let id = RunId::at(at(2024, 1, 1, 10, 30));
        let paths = RunPaths::new(Path::new("./checkpoints"), Path::new("./runs"), &id);
        assert_eq!(
            paths.checkpoint_dir,
            PathBuf::from("./checkpoints/2024-01-01-10-30")
        );
        assert_eq!(paths.tensorboard_dir, PathBuf::from("./runs/2024-01-01-10-30"));
    }
}
