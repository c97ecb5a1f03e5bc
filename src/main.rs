//! scriptbot - YouTube transcript summarizer
//!
//! Entry point for the scriptbot CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scriptbot::cli::{Cli, Commands};
use scriptbot::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            scriptbot::cli::completions::print(shell);
        }
        Commands::Languages => {
            scriptbot::cli::commands::list_languages();
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Summarize { url, language } => {
                    scriptbot::cli::commands::summarize_video(&settings, &url, &language).await?;
                }
                Commands::Tui => {
                    scriptbot::tui::run(&settings).await?;
                }
                Commands::Config(config_cmd) => {
                    scriptbot::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Languages | Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
