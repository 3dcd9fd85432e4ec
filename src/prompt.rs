//! Operator prompting: interactive stdin questions and canned answers.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::error::ScaffoldError;

/// Blocking question source for Ask steps. No timeout: a question waits as
/// long as the operator does.
pub trait Prompter {
    /// Free-form question. Empty input is accepted verbatim.
    fn ask(&mut self, key: &str, prompt: &str) -> Result<String, ScaffoldError>;

    /// Yes/no question, normalized case-insensitively.
    fn ask_yes_no(&mut self, key: &str, prompt: &str) -> Result<bool, ScaffoldError>;
}

/// Parse a yes/no token. Accepts yes/y/no/n in any case.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Interactive prompter reading stdin. Unrecognized yes/no input reprompts
/// rather than aborting the run; end-of-input while a question is pending
/// is an `Input` error.
pub struct StdioPrompter {
    interactive: bool,
}

impl StdioPrompter {
    pub fn new() -> Self {
        Self {
            interactive: atty::is(atty::Stream::Stdin),
        }
    }

    fn read_line(&self) -> Result<String, ScaffoldError> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ScaffoldError::input(format!("failed to read stdin: {e}")))?;
        if read == 0 {
            return Err(ScaffoldError::input(
                "unexpected end of input while a question was pending",
            ));
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        // Echo piped answers so the transcript still reads like a session.
        if !self.interactive {
            println!("{answer}");
        }
        Ok(answer)
    }

    fn show(&self, prompt: &str) -> Result<(), ScaffoldError> {
        print!("{} {}? ", format!("{:>12}", "asking").green().bold(), prompt);
        io::stdout()
            .flush()
            .map_err(|e| ScaffoldError::input(format!("failed to flush stdout: {e}")))
    }
}

impl Default for StdioPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdioPrompter {
    fn ask(&mut self, _key: &str, prompt: &str) -> Result<String, ScaffoldError> {
        self.show(prompt)?;
        self.read_line()
    }

    fn ask_yes_no(&mut self, _key: &str, prompt: &str) -> Result<bool, ScaffoldError> {
        loop {
            self.show(prompt)?;
            let line = self.read_line()?;
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => println!("Please answer yes or no (y/n)."),
            }
        }
    }
}

/// Canned answers keyed by question key, for `--answers` files and tests.
/// Missing keys and unrecognized yes/no values fail fast with an `Input`
/// error instead of reprompting.
pub struct ScriptedPrompter {
    answers: HashMap<String, String>,
}

impl ScriptedPrompter {
    pub fn new(answers: HashMap<String, String>) -> Self {
        Self { answers }
    }

    /// Load a flat JSON object of key -> answer.
    pub fn from_json_file(path: &Path) -> Result<Self, ScaffoldError> {
        let text = std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        let answers: HashMap<String, String> = serde_json::from_str(&text)
            .map_err(|e| ScaffoldError::input(format!("invalid answers file: {e}")))?;
        Ok(Self::new(answers))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, key: &str, _prompt: &str) -> Result<String, ScaffoldError> {
        self.answers
            .get(key)
            .cloned()
            .ok_or_else(|| ScaffoldError::input(format!("no canned answer for question '{key}'")))
    }

    fn ask_yes_no(&mut self, key: &str, prompt: &str) -> Result<bool, ScaffoldError> {
        let raw = self.ask(key, prompt)?;
        parse_yes_no(&raw).ok_or_else(|| {
            ScaffoldError::input(format!("canned answer for '{key}' is not yes/no: '{raw}'"))
        })
    }
}
