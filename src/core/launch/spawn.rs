use std::io::ErrorKind;
use std::process::ExitStatus;

use tracing::{info, warn};

use crate::core::launch::command::LaunchCommand;
use crate::error::{Error, Result};

/// Run the assembled command and block until the child exits.
///
/// The returned code is the child's own exit status, which the binary
/// forwards unchanged as its process exit code. A launcher binary that is
/// not on PATH surfaces as `Error::LauncherNotFound` rather than a bare
/// I/O message.
pub fn execute(command: &LaunchCommand) -> Result<i32> {
    info!("Launching: {}", command.render());

    let status = command
        .to_command()
        .status()
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::LauncherNotFound {
                program: command.program.clone(),
            },
            _ => Error::Spawn {
                program: command.program.clone(),
                source,
            },
        })?;

    let code = exit_code(status);
    if status.success() {
        info!("Launcher exited cleanly");
    } else {
        warn!("Launcher exited with status {}", code);
    }
    Ok(code)
}

/// Map an `ExitStatus` to the code this process should exit with.
/// Signal deaths follow the shell convention of 128 + signal on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}
