//! Step-level behavior of the applier against a scratch tree.

mod common;

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

use anvil::applier::Applier;
use anvil::prompt::ScriptedPrompter;
use anvil::step::{Guard, Step};
use anvil::template::Template;
use common::{FailingFetcher, StubFetcher};

fn scripted(pairs: &[(&str, &str)]) -> ScriptedPrompter {
    let mut answers = HashMap::new();
    for (key, value) in pairs {
        answers.insert(key.to_string(), value.to_string());
    }
    ScriptedPrompter::new(answers)
}

#[test]
fn write_then_append_preserves_order() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![
        Step::WriteFile {
            path: "config/database.yml",
            template: Template::plain("development:\n"),
        },
        Step::AppendFile {
            path: "config/database.yml",
            template: Template::plain("  adapter: postgresql\n"),
        },
    ];
    applier.apply(&steps).unwrap();

    let written = fs::read_to_string(dir.path().join("config/database.yml")).unwrap();
    assert_eq!(written, "development:\n  adapter: postgresql\n");
}

#[test]
fn answers_flow_into_templates() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[("team_name", "Acme")]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![
        Step::AskQuestion {
            key: "team_name",
            prompt: "Team name",
        },
        Step::WriteFile {
            path: "public/humans.txt",
            template: Template::new("built by TEAM_NAME\n", &["team_name"]),
        },
    ];
    applier.apply(&steps).unwrap();

    assert_eq!(applier.answers().value("team_name").unwrap(), "Acme");
    let written = fs::read_to_string(dir.path().join("public/humans.txt")).unwrap();
    assert_eq!(written, "built by Acme\n");
}

#[test]
fn false_guard_executes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[("formtastic", "n")]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![
        Step::AskYesNo {
            key: "formtastic",
            prompt: "Install formtastic",
        },
        Step::Conditional {
            guard: Guard::Yes("formtastic"),
            steps: vec![Step::WriteFile {
                path: "config/formtastic.rb",
                template: Template::plain("installed\n"),
            }],
        },
    ];
    applier.apply(&steps).unwrap();

    // the guarded write never ran and the tree only holds the scratch root
    assert!(!dir.path().join("config").exists());
}

#[test]
fn negated_guard_takes_the_other_branch() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[("free_software", "NO"), ("license_date", "2013-08-01")]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![
        Step::AskYesNo {
            key: "free_software",
            prompt: "Is this free software",
        },
        Step::Conditional {
            guard: Guard::Yes("free_software"),
            steps: vec![Step::WriteFile {
                path: "LICENSE",
                template: Template::plain("MIT\n"),
            }],
        },
        Step::Conditional {
            guard: Guard::No("free_software"),
            steps: vec![
                Step::AskQuestion {
                    key: "license_date",
                    prompt: "Software license date",
                },
                Step::WriteFile {
                    path: "LICENSE",
                    template: Template::new("signed on LICENSE_DATE\n", &["license_date"]),
                },
            ],
        },
    ];
    applier.apply(&steps).unwrap();

    let license = fs::read_to_string(dir.path().join("LICENSE")).unwrap();
    assert_eq!(license, "signed on 2013-08-01\n");
}

#[test]
fn download_writes_fetched_body() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test/", &mut prompter, &fetcher);

    let steps = vec![Step::DownloadAsset {
        file_name: "favicon.png",
        dest_dir: "public",
    }];
    applier.apply(&steps).unwrap();

    assert_eq!(
        fs::read(dir.path().join("public/favicon.png")).unwrap(),
        fetcher.body
    );
    assert!(!dir.path().join("public/favicon.png.part").exists());
}

#[test]
fn failed_download_aborts_before_later_steps() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[]);
    let fetcher = FailingFetcher;
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![
        Step::WriteFile {
            path: "Procfile",
            template: Template::plain("web: unicorn\n"),
        },
        Step::DownloadAsset {
            file_name: "favicon.png",
            dest_dir: "public",
        },
        Step::WriteFile {
            path: "robots.txt",
            template: Template::plain("Disallow:\n"),
        },
    ];
    let err = applier.apply(&steps).unwrap_err();

    // the failure names the step it happened at
    assert!(err.to_string().contains("step 2 of 3"), "got: {err}");
    // prior steps stand, later steps never ran, no partial asset remains
    assert!(dir.path().join("Procfile").exists());
    assert!(!dir.path().join("robots.txt").exists());
    assert!(!dir.path().join("public/favicon.png").exists());
}

#[test]
fn capture_falls_back_when_helper_is_missing() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[("team_name", "Acme")]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![
        Step::AskQuestion {
            key: "team_name",
            prompt: "Team name",
        },
        Step::CaptureCommand {
            key: "team_banner",
            program: "definitely-not-a-real-banner-tool",
            args: &[],
            input_key: "team_name",
        },
    ];
    applier.apply(&steps).unwrap();

    assert_eq!(applier.answers().value("team_banner").unwrap(), "Acme");
}

#[test]
fn missing_canned_answer_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let mut prompter = scripted(&[]);
    let fetcher = StubFetcher::new();
    let mut applier = Applier::new(dir.path(), "http://assets.test", &mut prompter, &fetcher);

    let steps = vec![Step::AskQuestion {
        key: "team_name",
        prompt: "Team name",
    }];
    let err = applier.apply(&steps).unwrap_err();
    assert!(err.to_string().contains("step 1 of 1"), "got: {err}");
}
