//! The Template Applier: executes an ordered list of scaffold steps
//! against a project tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::answers::AnswerSet;
use crate::download::{self, AssetFetcher};
use crate::error::ScaffoldError;
use crate::fsops::{self, InjectOutcome};
use crate::git;
use crate::manifest;
use crate::prompt::Prompter;
use crate::shell;
use crate::step::{Guard, Step};

/// Execution context for a scaffold run: the project root, the remote
/// asset host, and the answers accumulated so far. Threaded explicitly
/// through every step instead of living in ambient process state.
pub struct Applier<'a> {
    root: PathBuf,
    assets_url: String,
    answers: AnswerSet,
    prompter: &'a mut dyn Prompter,
    fetcher: &'a dyn AssetFetcher,
}

impl<'a> Applier<'a> {
    pub fn new(
        root: impl AsRef<Path>,
        assets_url: impl Into<String>,
        prompter: &'a mut dyn Prompter,
        fetcher: &'a dyn AssetFetcher,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            assets_url: assets_url.into(),
            answers: AnswerSet::new(),
            prompter,
            fetcher,
        }
    }

    /// Apply every step in order. Fail-fast: the first failure aborts the
    /// remaining sequence with the step number attached; already-applied
    /// steps are not rolled back.
    pub fn apply(&mut self, steps: &[Step]) -> Result<()> {
        let total = steps.len();
        for (index, step) in steps.iter().enumerate() {
            self.apply_step(step).with_context(|| {
                format!("step {} of {} failed: {}", index + 1, total, step.describe())
            })?;
        }
        Ok(())
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    fn apply_step(&mut self, step: &Step) -> Result<(), ScaffoldError> {
        match step {
            Step::AddDependency {
                name,
                version,
                group,
            } => {
                self.status("gemfile", name);
                manifest::add_dependency(&self.root, name, *version, *group)
            }
            Step::WriteFile { path, template } => {
                self.status("create", path);
                let content = template.render(&self.answers)?;
                fsops::write_file(&self.root.join(path), &content)
            }
            Step::AppendFile { path, template } => {
                self.status("append", path);
                let content = template.render(&self.answers)?;
                fsops::append_file(&self.root.join(path), &content)
            }
            Step::DeleteFile { path } => {
                if fsops::delete_file(&self.root.join(path))? {
                    self.status("remove", path);
                } else {
                    self.status("skip", &format!("{path} (not present)"));
                }
                Ok(())
            }
            Step::ReplaceInFile {
                path,
                needle,
                replacement,
            } => {
                if fsops::replace_in_file(&self.root.join(path), needle, replacement)? {
                    self.status("gsub", path);
                } else {
                    self.status("skip", &format!("{path} (not present)"));
                }
                Ok(())
            }
            Step::CommentOutFile { path } => {
                if fsops::comment_out_file(&self.root.join(path))? {
                    self.status("gsub", path);
                } else {
                    self.status("skip", &format!("{path} (not present)"));
                }
                Ok(())
            }
            Step::InjectIntoFile {
                path,
                after,
                content,
            } => {
                match fsops::inject_into_file(&self.root.join(path), after, content)? {
                    InjectOutcome::Injected => self.status("inject", path),
                    InjectOutcome::MissingFile => {
                        self.status("skip", &format!("{path} (not present)"));
                    }
                    InjectOutcome::MissingMarker => {
                        self.status("skip", &format!("{path} (marker not found)"));
                    }
                }
                Ok(())
            }
            Step::RunShell { program, args } => {
                self.status("run", &format!("{} {}", program, args.join(" ")));
                if !shell::run_status(&self.root, program, args) {
                    self.status("skip", &format!("{program} exited non-zero (continuing)"));
                }
                Ok(())
            }
            Step::CaptureCommand {
                key,
                program,
                args,
                input_key,
            } => {
                let input = self.answers.value(input_key)?.to_string();
                let value = if shell::command_available(program) {
                    self.status("run", program);
                    let mut full: Vec<&str> = args.to_vec();
                    full.push(&input);
                    shell::run_capture(&self.root, program, &full).unwrap_or_else(|| input.clone())
                } else {
                    input.clone()
                };
                self.answers.record(key, value);
                Ok(())
            }
            Step::DownloadAsset {
                file_name,
                dest_dir,
            } => {
                let url = format!("{}/{}", self.assets_url.trim_end_matches('/'), file_name);
                let dest = format!("{dest_dir}/{file_name}");
                self.status("download", &dest);
                let body = self.fetcher.fetch(&url)?;
                download::write_atomic(&self.root.join(&dest), &body)
            }
            Step::AskQuestion { key, prompt } => {
                let answer = self.prompter.ask(key, prompt)?;
                self.answers.record(key, answer);
                Ok(())
            }
            Step::AskYesNo { key, prompt } => {
                let answer = self.prompter.ask_yes_no(key, prompt)?;
                self.answers.record_flag(key, answer);
                Ok(())
            }
            Step::Conditional { guard, steps } => {
                if self.guard_holds(*guard)? {
                    for nested in steps {
                        self.apply_step(nested)?;
                    }
                }
                Ok(())
            }
            Step::GitCommit { message } => {
                self.status("commit", message);
                if !git::is_repo(&self.root) {
                    git::init_repo(&self.root)?;
                }
                git::add_all(&self.root)?;
                git::commit(&self.root, message)
            }
        }
    }

    fn guard_holds(&self, guard: Guard) -> Result<bool, ScaffoldError> {
        match guard {
            Guard::Yes(key) => self.answers.flag(key),
            Guard::No(key) => Ok(!self.answers.flag(key)?),
        }
    }

    fn status(&self, verb: &str, detail: &str) {
        println!("{} {}", format!("{verb:>12}").green().bold(), detail);
    }
}
