use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "One-shot web app scaffolding for fresh Rails skeletons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the scaffold recipe to a project tree
    Apply {
        /// Project directory to scaffold
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Canned answers JSON file (non-interactive runs)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Base URL for remote assets
        #[arg(long, default_value = anvil::recipe::DEFAULT_ASSETS_URL)]
        assets_url: String,
    },

    /// Print the recipe's step list without applying it
    Plan {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            dir,
            answers,
            assets_url,
        } => {
            commands::apply::execute(dir, answers, assets_url)?;
        }
        Commands::Plan { json } => {
            commands::plan::execute(json)?;
        }
    }

    Ok(())
}
