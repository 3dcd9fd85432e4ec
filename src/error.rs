//! Error taxonomy for scaffold runs.
//!
//! Fail-fast: the first error aborts the remaining step sequence. There is
//! no local recovery and no rollback of already-applied steps.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// File create/read/write/delete failures.
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Asset download failures: transport errors and non-2xx responses.
    #[error("download failed for {url}: {detail}")]
    Network { url: String, detail: String },

    /// Malformed or missing operator input, including a template that
    /// references a question that was never asked.
    #[error("bad input: {detail}")]
    Input { detail: String },

    /// Fatal subprocess failures. Feature-detection commands surface
    /// availability as a boolean instead of going through here.
    #[error("command `{command}` failed: {detail}")]
    Shell { command: String, detail: String },
}

impl ScaffoldError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn input(detail: impl Into<String>) -> Self {
        Self::Input {
            detail: detail.into(),
        }
    }
}
