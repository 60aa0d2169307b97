//! Main entry point for Tradutor CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradutor::cli::commands::{self, Commands};
use tradutor::TranslatorConfig;

/// Tradutor - translate text as you type
#[derive(Parser, Debug)]
#[command(name = "tradutor", version, about, long_about = None)]
struct Args {
    /// Configuration file (JSON or TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TranslatorConfig::load(args.config.as_deref())?;

    // Execute command
    match args.command {
        Some(Commands::Interactive { from, to }) => {
            commands::handle_interactive(config, from, to).await?;
        }
        Some(Commands::Translate { from, to, text }) => {
            commands::handle_translate(config, from, to, text).await?;
        }
        Some(Commands::Languages) => {
            commands::handle_languages(&config);
        }
        Some(Commands::Serve { host, port }) => {
            commands::handle_server(config, host, port).await?;
        }
        None => {
            commands::handle_interactive(config, None, None).await?;
        }
    }

    Ok(())
}
