mod branches;
mod chat;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use laundro_core::BranchDirectory;
use tracing_subscriber::EnvFilter;

use crate::branches::BranchCommands;

#[derive(Debug, Parser)]
#[command(name = "laundro-cli")]
#[command(about = "Laundro branch directory and chat command line interface")]
struct Cli {
    /// YAML catalog to load instead of the built-in branch list
    #[arg(long, global = true, env = "LAUNDRO_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and filter the branch directory
    Branches {
        #[command(subcommand)]
        command: BranchCommands,
    },
    /// Ask the FAQ bot a single question
    Chat {
        /// Question text
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Branches { command }) => {
            let directory = load_directory(cli.catalog.as_deref())?;
            branches::run(&directory, command, cli.json)?;
        }
        Some(Commands::Chat { text }) => chat::run(&text, cli.json)?,
        None => println!("nothing to do; try `laundro-cli --help`"),
    }

    Ok(())
}

fn load_directory(path: Option<&std::path::Path>) -> anyhow::Result<BranchDirectory> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading branch catalog");
            laundro_core::load_directory(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))
        }
        None => Ok(laundro_core::builtin_directory()),
    }
}

#[cfg(test)]
mod tests;
