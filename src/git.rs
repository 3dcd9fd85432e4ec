//! Git plumbing for the final commit.
//!
//! The initial commit is the last step of a run and marks successful
//! completion, so unlike the optional helper commands these operations are
//! fatal on failure.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::ScaffoldError;

fn run_git(dir: &Path, args: &[&str]) -> Result<Output, ScaffoldError> {
    Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .map_err(|e| ScaffoldError::Shell {
            command: format!("git {}", args.join(" ")),
            detail: e.to_string(),
        })
}

fn expect_success(output: Output, args: &[&str]) -> Result<(), ScaffoldError> {
    if output.status.success() {
        return Ok(());
    }
    Err(ScaffoldError::Shell {
        command: format!("git {}", args.join(" ")),
        detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Check whether `dir` is already inside a git work tree.
pub fn is_repo(dir: &Path) -> bool {
    run_git(dir, &["rev-parse", "--git-dir"])
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initialize a repository in `dir`.
pub fn init_repo(dir: &Path) -> Result<(), ScaffoldError> {
    let args = ["init"];
    let output = run_git(dir, &args)?;
    expect_success(output, &args)
}

/// Stage everything under `dir`.
pub fn add_all(dir: &Path) -> Result<(), ScaffoldError> {
    let args = ["add", "."];
    let output = run_git(dir, &args)?;
    expect_success(output, &args)
}

/// Commit staged changes.
pub fn commit(dir: &Path, message: &str) -> Result<(), ScaffoldError> {
    let args = ["commit", "-m", message];
    let output = run_git(dir, &args)?;
    expect_success(output, &args)
}
