use anyhow::{Context, Result};
use std::path::PathBuf;

use anvil::applier::Applier;
use anvil::download::HttpFetcher;
use anvil::prompt::{Prompter, ScriptedPrompter, StdioPrompter};
use anvil::recipe;

pub fn execute(dir: PathBuf, answers: Option<PathBuf>, assets_url: String) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Project directory does not exist: {} (generate the app skeleton first)",
            dir.display()
        );
    }

    let steps = recipe::steps();
    println!(
        "🔨 Scaffolding {} ({} steps)",
        dir.display(),
        steps.len()
    );

    let mut prompter: Box<dyn Prompter> = match answers {
        Some(path) => Box::new(
            ScriptedPrompter::from_json_file(&path)
                .with_context(|| format!("Failed to load answers from {}", path.display()))?,
        ),
        None => Box::new(StdioPrompter::new()),
    };
    let fetcher = HttpFetcher::new()?;

    let mut applier = Applier::new(&dir, assets_url, prompter.as_mut(), &fetcher);
    applier.apply(&steps)?;

    println!("\n✨ Scaffold complete: tree committed");
    Ok(())
}
