//! Launches the cached `tofu` binary and relays its exit code

use crate::error::{Result, ShimError};
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Runs `binary_path` with `args`, inheriting stdin, stdout and stderr
///
/// Arguments are passed as-is (no shell), including ones that are not valid
/// UTF-8. Blocks until the child exits.
///
/// # Returns
///
/// The child's exit code; on Unix a child killed by signal `N` yields `128 + N`
///
/// # Errors
///
/// Returns `ProcessStartFailed` if the child cannot be spawned
pub fn run(binary_path: &Path, args: &[OsString]) -> Result<i32> {
    debug!("exec {} {:?}", binary_path.display(), args);

    let status = Command::new(binary_path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ShimError::ProcessStartFailed {
            path: binary_path.to_path_buf(),
            source: e,
        })?;

    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
