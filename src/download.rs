//! Remote asset fetching.
//!
//! The whole body is buffered before anything touches the tree, and the
//! write goes through a temp-file-then-rename, so a failed transfer never
//! leaves a corrupt asset in place.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::error::ScaffoldError;
use crate::fsops;

/// Fetches a remote asset, returning the full body.
pub trait AssetFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScaffoldError>;
}

/// Blocking HTTP fetcher. No retries: a single failed fetch aborts the run.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("anvil/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScaffoldError> {
        let network = |detail: String| ScaffoldError::Network {
            url: url.to_string(),
            detail,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(network(format!("HTTP {}", response.status())));
        }

        let body = response.bytes().map_err(|e| network(e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// Write `bytes` to a `.part` sibling, then rename into place.
pub fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), ScaffoldError> {
    fsops::ensure_parent(dest)?;
    let file_name = dest
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            ScaffoldError::io(
                dest,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "destination has no file name"),
            )
        })?;
    let tmp = dest.with_file_name(format!("{file_name}.part"));
    fs::write(&tmp, bytes).map_err(|e| ScaffoldError::io(&tmp, e))?;
    fs::rename(&tmp, dest).map_err(|e| ScaffoldError::io(dest, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents_and_leaves_no_part_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("public/favicon.png");
        write_atomic(&dest, b"\x89PNG").unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"\x89PNG");
        assert!(!dir.path().join("public/favicon.png.part").exists());
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("og-image.png");
        write_atomic(&dest, b"old").unwrap();
        write_atomic(&dest, b"new").unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }
}
