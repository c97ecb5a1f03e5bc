//! scriptbot - Fetch a YouTube video transcript and summarize it with Gemini
//!
//! Paste a link, pick the spoken language, get a summary.

pub mod cli;
pub mod config;
pub mod languages;
pub mod llm;
pub mod pipeline;
pub mod transcript;
pub mod tui;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "scriptbot";
