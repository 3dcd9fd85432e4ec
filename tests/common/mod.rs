#![allow(dead_code)]

use std::collections::HashMap;

use anvil::download::AssetFetcher;
use anvil::error::ScaffoldError;

/// Serves a fixed body for every asset, keeping tests off the network.
pub struct StubFetcher {
    pub body: &'static [u8],
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            body: b"\x89PNG-stub",
        }
    }
}

impl AssetFetcher for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, ScaffoldError> {
        Ok(self.body.to_vec())
    }
}

/// Refuses every fetch, standing in for an unreachable asset host.
pub struct FailingFetcher;

impl AssetFetcher for FailingFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScaffoldError> {
        Err(ScaffoldError::Network {
            url: url.to_string(),
            detail: "connection refused".to_string(),
        })
    }
}

/// Canned operator answers for a full-recipe run.
pub fn canned_answers() -> HashMap<String, String> {
    let mut answers = HashMap::new();
    for (key, value) in [
        ("locale_br", "yes"),
        ("team_name", "Acme"),
        ("team_url", "http://acme.example"),
        ("formtastic", "yes"),
        ("free_software", "yes"),
        ("db_prefix", "db"),
        ("db_username", "user"),
        ("db_password", "pw"),
    ] {
        answers.insert(key.to_string(), value.to_string());
    }
    answers
}
