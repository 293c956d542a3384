mod output;
mod scrape;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "freegame")]
#[command(about = "Find games that are temporarily free to keep")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the Epic Games Store catalog and list the free games
    Scrape {
        /// Print deals as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Extract free games from a saved catalog response, without network access
    Extract {
        /// Path to a saved `searchStoreQuery` response body
        file: PathBuf,

        /// Print deals as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = freegame_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Scrape { json }) => scrape::run_scrape(&config, json).await?,
        Some(Commands::Extract { file, json }) => scrape::run_extract(&file, json)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}
