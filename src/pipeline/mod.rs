//! The fetch-then-summarize flow behind the trigger action.
//!
//! Shared by the TUI and the one-shot CLI command. One request in flight at
//! a time; fetch and generate run sequentially.

use anyhow::Result;

use crate::llm::{self, prompts::SUMMARY_INSTRUCTION, LlmProvider};
use crate::transcript::{fetch_transcript, TranscriptProvider};

/// What one trigger action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Generated summary text, verbatim.
    Summary(String),
    /// Human-readable "Error: ..." string from the transcript stage.
    TranscriptUnavailable(String),
}

/// Run one fetch-then-summarize action.
///
/// The generator is never invoked when the transcript stage reports an
/// unavailable transcript; its error string is surfaced instead.
pub async fn run(
    transcripts: &dyn TranscriptProvider,
    llm: &dyn LlmProvider,
    video_url: &str,
    language_code: &str,
) -> Result<RunOutcome> {
    let transcript = fetch_transcript(transcripts, video_url, language_code).await?;

    if transcript.starts_with("Error") {
        return Ok(RunOutcome::TranscriptUnavailable(transcript));
    }

    tracing::debug!(chars = transcript.len(), "transcript fetched, summarizing");

    let summary = llm::summarize(llm, &transcript, SUMMARY_INSTRUCTION).await?;
    Ok(RunOutcome::Summary(summary))
}
