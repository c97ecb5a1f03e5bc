//! Transcript retrieval
//!
//! Derives the video identifier from a pasted link and fetches the spoken
//! transcript in the requested language from the caption provider.

mod youtube;

pub use youtube::YoutubeTranscriptClient;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;

/// One timed unit of spoken text returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFragment {
    pub text: String,
}

/// Conditions the transcript provider can report.
///
/// The first three are ordinary outcomes the UI renders as text; `Provider`
/// is fatal to the current action.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Subtitles are disabled for this video")]
    Disabled,

    #[error("No transcript was found for language '{language}'")]
    NotFound { language: String },

    #[error("The video is unavailable")]
    VideoUnavailable,

    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> std::result::Result<Vec<TranscriptFragment>, TranscriptError>;
}

/// Derive the video identifier from a pasted link.
///
/// The identifier is everything strictly after the first '='. A link
/// without one is malformed and fails the current action.
pub fn extract_video_id(url: &str) -> Result<&str> {
    let (_, video_id) = url
        .split_once('=')
        .with_context(|| format!("URL '{}' does not contain a '=' separator", url.trim()))?;
    Ok(video_id)
}

/// Fetch the transcript for a video link in the requested language.
///
/// Fragment texts are joined with single spaces in provider order. The
/// disabled / not-found / unavailable conditions come back as an `Ok`
/// string prefixed with "Error:" so the caller can render them without
/// unwinding; anything else propagates.
pub async fn fetch_transcript(
    provider: &dyn TranscriptProvider,
    video_url: &str,
    language_code: &str,
) -> Result<String> {
    let video_id = extract_video_id(video_url)?;

    match provider.fetch(video_id, language_code).await {
        Ok(fragments) => Ok(fragments
            .iter()
            .map(|fragment| fragment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")),
        Err(TranscriptError::Provider(err)) => Err(err.context("Failed to fetch transcript")),
        Err(err) => Ok(format!(
            "Error: {}. Unable to fetch transcript in the desired language.",
            err
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubProvider {
        result: std::result::Result<Vec<TranscriptFragment>, TranscriptError>,
    }

    impl StubProvider {
        fn fragments(texts: &[&str]) -> Self {
            Self {
                result: Ok(texts
                    .iter()
                    .map(|text| TranscriptFragment {
                        text: text.to_string(),
                    })
                    .collect()),
            }
        }

        fn error(err: TranscriptError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl TranscriptProvider for StubProvider {
        async fn fetch(
            &self,
            _video_id: &str,
            _language_code: &str,
        ) -> std::result::Result<Vec<TranscriptFragment>, TranscriptError> {
            match &self.result {
                Ok(fragments) => Ok(fragments.clone()),
                Err(TranscriptError::Disabled) => Err(TranscriptError::Disabled),
                Err(TranscriptError::VideoUnavailable) => Err(TranscriptError::VideoUnavailable),
                Err(TranscriptError::NotFound { language }) => Err(TranscriptError::NotFound {
                    language: language.clone(),
                }),
                Err(TranscriptError::Provider(err)) => {
                    Err(TranscriptError::Provider(anyhow::anyhow!("{}", err)))
                }
            }
        }
    }

    #[test]
    fn video_id_is_substring_after_first_equals() {
        let id = extract_video_id("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(id, "abc123");

        // Only the first '=' splits; the rest of the query stays attached.
        let id = extract_video_id("https://youtube.com/watch?v=abc123&t=42").unwrap();
        assert_eq!(id, "abc123&t=42");
    }

    #[test]
    fn url_without_equals_is_an_error() {
        let err = extract_video_id("https://youtu.be/abc123").unwrap_err();
        assert!(err.to_string().contains("does not contain"));
    }

    #[tokio::test]
    async fn fragments_are_joined_with_single_spaces() {
        let provider = StubProvider::fragments(&["Hello", "world"]);
        let transcript = fetch_transcript(&provider, "https://youtube.com/watch?v=abc", "en")
            .await
            .unwrap();
        assert_eq!(transcript, "Hello world");
    }

    #[tokio::test]
    async fn missing_language_becomes_error_string() {
        let provider = StubProvider::error(TranscriptError::NotFound {
            language: "fr".to_string(),
        });
        let transcript = fetch_transcript(&provider, "https://youtube.com/watch?v=abc", "fr")
            .await
            .unwrap();
        assert!(transcript.starts_with("Error:"));
        assert!(transcript.contains("found"));
        assert!(transcript.contains("Unable to fetch transcript in the desired language."));
    }

    #[tokio::test]
    async fn disabled_subtitles_become_error_string() {
        let provider = StubProvider::error(TranscriptError::Disabled);
        let transcript = fetch_transcript(&provider, "https://youtube.com/watch?v=abc", "en")
            .await
            .unwrap();
        assert!(transcript.starts_with("Error:"));
        assert!(transcript.contains("disabled"));
    }

    #[tokio::test]
    async fn unavailable_video_becomes_error_string() {
        let provider = StubProvider::error(TranscriptError::VideoUnavailable);
        let transcript = fetch_transcript(&provider, "https://youtube.com/watch?v=abc", "en")
            .await
            .unwrap();
        assert!(transcript.starts_with("Error:"));
        assert!(transcript.contains("unavailable"));
    }

    #[tokio::test]
    async fn unexpected_provider_failure_propagates() {
        let provider =
            StubProvider::error(TranscriptError::Provider(anyhow::anyhow!("connection reset")));
        let err = fetch_transcript(&provider, "https://youtube.com/watch?v=abc", "en")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to fetch transcript"));
    }

    #[tokio::test]
    async fn malformed_url_fails_before_the_provider_is_asked() {
        let provider = StubProvider::fragments(&["never", "used"]);
        let err = fetch_transcript(&provider, "https://youtu.be/abc", "en")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not contain"));
    }
}
