use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt, return the generated text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}

/// Generate a summary for a transcript.
///
/// The instruction goes in front of the transcript and the provider's
/// output comes back untouched; there is no retry and no truncation.
/// An empty transcript is rejected before any request is made.
pub async fn summarize(
    provider: &dyn LlmProvider,
    transcript: &str,
    instruction: &str,
) -> Result<String> {
    if transcript.is_empty() {
        anyhow::bail!("Transcript is empty, nothing to summarize");
    }

    provider
        .generate(&format!("{}{}", instruction, transcript))
        .await
}
