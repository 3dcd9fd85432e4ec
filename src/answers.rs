//! Answers collected from the operator during a run.

use std::collections::HashMap;

use crate::error::ScaffoldError;

/// Ephemeral mapping from question key to operator-supplied value, scoped
/// to a single run and never persisted. String answers feed template
/// substitution; yes/no answers feed conditional guards.
#[derive(Debug, Default)]
pub struct AnswerSet {
    values: HashMap<String, String>,
    flags: HashMap<String, bool>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    pub fn record_flag(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }

    /// Look up a string answer. A missing key means the recipe consumed an
    /// answer before asking for it, which is a defect in the step order.
    pub fn value(&self, key: &str) -> Result<&str, ScaffoldError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ScaffoldError::input(format!("no answer recorded for '{key}'")))
    }

    /// Look up a yes/no answer.
    pub fn flag(&self, key: &str) -> Result<bool, ScaffoldError> {
        self.flags
            .get(key)
            .copied()
            .ok_or_else(|| ScaffoldError::input(format!("no yes/no answer recorded for '{key}'")))
    }
}
