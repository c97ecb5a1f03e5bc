//! CLI command implementations

use anyhow::{Context, Result};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::languages;
use crate::llm::build_provider;
use crate::pipeline::{self, RunOutcome};
use crate::transcript::YoutubeTranscriptClient;

/// Fetch the transcript for one video and print an AI-generated summary.
pub async fn summarize_video(settings: &Settings, url: &str, language: &str) -> Result<()> {
    let code = languages::code_for(language).with_context(|| {
        format!(
            "Unknown language '{}'. Run 'scriptbot languages' for the supported list.",
            language
        )
    })?;

    let transcripts = YoutubeTranscriptClient::new()?;
    let provider = build_provider(settings)?;

    match pipeline::run(&transcripts, provider.as_ref(), url, code).await? {
        RunOutcome::Summary(summary) => {
            println!("Detailed Analysis:");
            println!("{}", "-".repeat(50));
            println!("{}", summary);
        }
        RunOutcome::TranscriptUnavailable(message) => {
            println!("{}", message);
        }
    }

    Ok(())
}

/// Print the supported language table
pub fn list_languages() {
    println!("{:<24} {}", "Language", "Code");
    println!("{}", "-".repeat(32));

    for (name, code) in languages::all() {
        println!("{:<24} {}", name, code);
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
