//! Project-tree file operations.
//!
//! Mutation steps that target a file the upstream generator was expected
//! to provide (delete, replace, comment-out, inject) treat a missing
//! target as a soft no-op and report it, so the same recipe runs against
//! both a full Rails skeleton and a bare tree.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::ScaffoldError;

/// Outcome of an injection attempt, so the caller can report skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Injected,
    MissingFile,
    MissingMarker,
}

pub(crate) fn ensure_parent(path: &Path) -> Result<(), ScaffoldError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }
    }
    Ok(())
}

fn read_optional(path: &Path) -> Result<Option<String>, ScaffoldError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ScaffoldError::io(path, e)),
    }
}

/// Write `content`, creating parent directories as needed. Overwrites an
/// existing file unconditionally.
pub fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    ensure_parent(path)?;
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))
}

/// Concatenate `content` onto the file, creating it (and its parents)
/// when missing.
pub fn append_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    ensure_parent(path)?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScaffoldError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::io(path, e))
}

/// Remove a file. Returns whether anything was removed; a missing target
/// is a soft no-op.
pub fn delete_file(path: &Path) -> Result<bool, ScaffoldError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ScaffoldError::io(path, e)),
    }
}

/// Literal substring rewrite of an existing file. Returns whether the file
/// was present to rewrite.
pub fn replace_in_file(
    path: &Path,
    needle: &str,
    replacement: &str,
) -> Result<bool, ScaffoldError> {
    let Some(text) = read_optional(path)? else {
        return Ok(false);
    };
    write_file(path, &text.replace(needle, replacement))?;
    Ok(true)
}

/// Prefix every line not already commented with `#`, disabling the file
/// while keeping it in the tree for reference.
pub fn comment_out_file(path: &Path) -> Result<bool, ScaffoldError> {
    let Some(text) = read_optional(path)? else {
        return Ok(false);
    };
    let mut commented = String::with_capacity(text.len() + 64);
    for line in text.lines() {
        if !line.starts_with('#') {
            commented.push('#');
        }
        commented.push_str(line);
        commented.push('\n');
    }
    write_file(path, &commented)?;
    Ok(true)
}

/// Insert `content` on its own lines immediately after the first line
/// containing the `after` marker.
pub fn inject_into_file(
    path: &Path,
    after: &str,
    content: &str,
) -> Result<InjectOutcome, ScaffoldError> {
    let Some(text) = read_optional(path)? else {
        return Ok(InjectOutcome::MissingFile);
    };
    let Some(marker_at) = text.find(after) else {
        return Ok(InjectOutcome::MissingMarker);
    };
    let line_end = text[marker_at..]
        .find('\n')
        .map(|offset| marker_at + offset + 1)
        .unwrap_or(text.len());

    let mut patched = String::with_capacity(text.len() + content.len() + 2);
    patched.push_str(&text[..line_end]);
    if !patched.ends_with('\n') {
        patched.push('\n');
    }
    patched.push_str(content);
    if !content.ends_with('\n') {
        patched.push('\n');
    }
    patched.push_str(&text[line_end..]);

    write_file(path, &patched)?;
    Ok(InjectOutcome::Injected)
}
