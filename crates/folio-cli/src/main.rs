use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio viewer with animated sections")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio document to show (overrides the configured path)
    #[arg(short = 'p', long = "portfolio")]
    portfolio_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the viewer
    Run {
        /// Portfolio document to show
        #[arg(short = 'p', long = "portfolio")]
        portfolio_path: Option<PathBuf>,
    },
    /// Write a starter portfolio document and default config
    Init {
        /// Directory for the generated portfolio.toml
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Validate a portfolio document
    Check {
        /// Portfolio file to validate
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { portfolio_path }) => {
            commands::run::run(config, portfolio_path.or(cli.portfolio_path))
        }
        None => commands::run::run(config, cli.portfolio_path),
        Some(Commands::Init { dir, force }) => commands::init::run(&config, &dir, force),
        Some(Commands::Check { file }) => commands::check::run(&file),
    }
}
