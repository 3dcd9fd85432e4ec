//! Scaffold steps: the ordered, inspectable unit of work.
//!
//! The execution order of a recipe is a first-class artifact: a recipe is
//! a `Vec<Step>`, steps are immutable once defined, and they run in fixed
//! order with no retries and no reordering.

use serde::Serialize;

use crate::template::Template;

/// Bundler dependency group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyGroup {
    Development,
    Production,
}

impl DependencyGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            DependencyGroup::Development => "development",
            DependencyGroup::Production => "production",
        }
    }
}

/// Guard for `Conditional` steps, referencing a prior `AskYesNo` answer.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Guard {
    Yes(&'static str),
    No(&'static str),
}

impl Guard {
    fn describe(self) -> String {
        match self {
            Guard::Yes(key) => format!("{key} = yes"),
            Guard::No(key) => format!("{key} = no"),
        }
    }
}

/// One discrete operation applied to the project tree.
#[derive(Debug, Clone)]
pub enum Step {
    /// Append a gem declaration to the Gemfile.
    AddDependency {
        name: &'static str,
        version: Option<&'static str>,
        group: Option<DependencyGroup>,
    },
    /// Render a template and write it, creating parent directories.
    WriteFile {
        path: &'static str,
        template: Template,
    },
    /// Render a template and concatenate it onto a file, creating it when
    /// missing.
    AppendFile {
        path: &'static str,
        template: Template,
    },
    /// Remove a file the upstream generator produced. Missing targets are
    /// a soft no-op.
    DeleteFile { path: &'static str },
    /// Literal substring rewrite of an existing file.
    ReplaceInFile {
        path: &'static str,
        needle: &'static str,
        replacement: &'static str,
    },
    /// Prefix every non-comment line with `#`.
    CommentOutFile { path: &'static str },
    /// Insert a block after the first line containing a marker.
    InjectIntoFile {
        path: &'static str,
        after: &'static str,
        content: &'static str,
    },
    /// Synchronous subprocess; exit status is reported, never fatal.
    RunShell {
        program: &'static str,
        args: &'static [&'static str],
    },
    /// Run an optional helper, appending the value of `input_key` as the
    /// final argument, and store its stdout in the answer set under `key`.
    /// Falls back to the input value when the helper is unavailable.
    CaptureCommand {
        key: &'static str,
        program: &'static str,
        args: &'static [&'static str],
        input_key: &'static str,
    },
    /// Blocking GET of `<assets-url>/<file_name>` into `dest_dir`.
    DownloadAsset {
        file_name: &'static str,
        dest_dir: &'static str,
    },
    /// Free-form question; the answer lands in the answer set.
    AskQuestion {
        key: &'static str,
        prompt: &'static str,
    },
    /// Yes/no question; the answer feeds conditional guards.
    AskYesNo {
        key: &'static str,
        prompt: &'static str,
    },
    /// Execute the nested steps only when the guard holds. There is no
    /// else branch; negate the guard in a second conditional instead.
    Conditional { guard: Guard, steps: Vec<Step> },
    /// `git init` (when needed) + `git add .` + `git commit`. The final
    /// step of the recipe; its success marks completion.
    GitCommit { message: &'static str },
}

impl Step {
    /// Human description used in status lines and failure reports.
    pub fn describe(&self) -> String {
        match self {
            Step::AddDependency { name, .. } => format!("add gem '{name}'"),
            Step::WriteFile { path, .. } => format!("write {path}"),
            Step::AppendFile { path, .. } => format!("append to {path}"),
            Step::DeleteFile { path } => format!("delete {path}"),
            Step::ReplaceInFile { path, .. } => format!("replace in {path}"),
            Step::CommentOutFile { path } => format!("comment out {path}"),
            Step::InjectIntoFile { path, .. } => format!("inject into {path}"),
            Step::RunShell { program, args } => {
                format!("run {} {}", program, args.join(" "))
            }
            Step::CaptureCommand { program, key, .. } => {
                format!("capture {program} output as '{key}'")
            }
            Step::DownloadAsset {
                file_name,
                dest_dir,
            } => format!("download {dest_dir}/{file_name}"),
            Step::AskQuestion { prompt, .. } => format!("ask '{prompt}'"),
            Step::AskYesNo { prompt, .. } => format!("ask '{prompt}'"),
            Step::Conditional { guard, .. } => {
                format!("conditional on {}", guard.describe())
            }
            Step::GitCommit { message } => format!("git commit '{message}'"),
        }
    }

    /// Serializable projection for `anvil plan`.
    pub fn summary(&self) -> StepSummary {
        let (kind, detail) = match self {
            Step::AddDependency { name, .. } => ("add-dependency", name.to_string()),
            Step::WriteFile { path, .. } => ("write-file", path.to_string()),
            Step::AppendFile { path, .. } => ("append-file", path.to_string()),
            Step::DeleteFile { path } => ("delete-file", path.to_string()),
            Step::ReplaceInFile { path, .. } => ("replace-in-file", path.to_string()),
            Step::CommentOutFile { path } => ("comment-out-file", path.to_string()),
            Step::InjectIntoFile { path, .. } => ("inject-into-file", path.to_string()),
            Step::RunShell { program, args } => {
                ("run-shell", format!("{} {}", program, args.join(" ")))
            }
            Step::CaptureCommand { program, key, .. } => {
                ("capture-command", format!("{program} -> {key}"))
            }
            Step::DownloadAsset {
                file_name,
                dest_dir,
            } => ("download-asset", format!("{dest_dir}/{file_name}")),
            Step::AskQuestion { prompt, .. } => ("ask", prompt.to_string()),
            Step::AskYesNo { prompt, .. } => ("ask-yes-no", prompt.to_string()),
            Step::Conditional { guard, .. } => ("conditional", guard.describe()),
            Step::GitCommit { message } => ("git-commit", message.to_string()),
        };

        let nested = match self {
            Step::Conditional { steps, .. } => steps.iter().map(Step::summary).collect(),
            _ => Vec::new(),
        };

        StepSummary {
            kind,
            detail,
            nested,
        }
    }
}

/// Flat, serializable view of a step for `plan --json`.
#[derive(Debug, Serialize)]
pub struct StepSummary {
    pub kind: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<StepSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_names_the_target() {
        let step = Step::WriteFile {
            path: "config/unicorn.rb",
            template: Template::plain("preload_app true\n"),
        };
        assert_eq!(step.describe(), "write config/unicorn.rb");
    }

    #[test]
    fn test_summary_carries_nested_steps() {
        let step = Step::Conditional {
            guard: Guard::Yes("formtastic"),
            steps: vec![Step::AddDependency {
                name: "formtastic",
                version: None,
                group: None,
            }],
        };
        let summary = step.summary();
        assert_eq!(summary.kind, "conditional");
        assert_eq!(summary.nested.len(), 1);
        assert_eq!(summary.nested[0].kind, "add-dependency");
    }
}
