use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Compute the launch root for a given executable location: the parent of
/// the directory the binary sits in. Installing the binary under
/// `<repo>/bin/` therefore roots the run at `<repo>`, regardless of the
/// caller's working directory.
pub fn root_from_executable(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::RootResolution {
            path: exe.to_path_buf(),
        })
}

/// Resolve the launch root from the running executable
pub fn resolve_root() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    root_from_executable(&exe)
}

/// Enter the launch root. Relative artifact roots (`./checkpoints`,
/// `./runs`) and the training script path resolve against it from here on.
/// Failure is fatal and must abort before any process is spawned.
pub fn enter_root(root: &Path) -> Result<()> {
    env::set_current_dir(root).map_err(|source| Error::EnterRoot {
        root: root.to_path_buf(),
        source,
    })?;
    debug!("Entered launch root: {}", root.display());
    Ok(())
}
