//! Subprocess helpers: optional-tool detection and non-fatal commands.

use std::path::Path;
use std::process::Command;

/// Check whether a helper tool is on PATH. Absence is a signal for the
/// recipe to branch on, not an error.
pub fn command_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Run a command in `dir`, streaming its output, and report whether it
/// exited zero. A missing binary counts as failure, never as an abort.
pub fn run_status(dir: &Path, program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .current_dir(dir)
        .args(args)
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Run a command in `dir` and capture its stdout. `None` when the binary
/// is missing or the command exits non-zero.
pub fn run_capture(dir: &Path, program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .current_dir(dir)
        .args(args)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
