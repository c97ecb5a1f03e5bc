//! YouTube caption retrieval via the innertube player endpoint.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::transcript::{TranscriptError, TranscriptFragment, TranscriptProvider};

const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";

// The ANDROID client serves caption track URLs that need no signature.
const CLIENT_NAME: &str = "ANDROID";
const CLIENT_VERSION: &str = "20.10.38";

pub struct YoutubeTranscriptClient {
    http: Client,
}

impl YoutubeTranscriptClient {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build transcript HTTP client")?,
        })
    }

    /// Resolve the caption track list for a video.
    async fn player_response(&self, video_id: &str) -> anyhow::Result<PlayerResponse> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": CLIENT_NAME,
                    "clientVersion": CLIENT_VERSION,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .http
            .post(PLAYER_ENDPOINT)
            .json(&body)
            .send()
            .await
            .context("Transcript provider request failed")?
            .error_for_status()
            .context("Transcript provider returned an error status")?;

        response
            .json()
            .await
            .context("Failed to parse player response")
    }

    /// Download one caption track as json3 events.
    async fn caption_events(&self, base_url: &str) -> anyhow::Result<Vec<CaptionEvent>> {
        let url = format!("{}&fmt=json3", base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Caption track request failed")?
            .error_for_status()
            .context("Caption track returned an error status")?;

        let payload: CaptionPayload = response
            .json()
            .await
            .context("Failed to parse caption track")?;

        Ok(payload.events)
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeTranscriptClient {
    async fn fetch(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<Vec<TranscriptFragment>, TranscriptError> {
        let player = self.player_response(video_id).await?;

        let status = player.playability_status.status.as_deref().unwrap_or("OK");
        if !status.eq_ignore_ascii_case("OK") {
            tracing::debug!(video_id, status, "video is not playable");
            return Err(TranscriptError::VideoUnavailable);
        }

        let tracks = player
            .captions
            .and_then(|captions| captions.renderer)
            .map(|renderer| renderer.caption_tracks)
            .filter(|tracks| !tracks.is_empty())
            .ok_or(TranscriptError::Disabled)?;

        let track = tracks
            .iter()
            .find(|track| track.language_code == language_code)
            .ok_or_else(|| TranscriptError::NotFound {
                language: language_code.to_string(),
            })?;

        let events = self.caption_events(&track.base_url).await?;

        Ok(events
            .into_iter()
            .filter_map(|event| {
                let text: String = event
                    .segs
                    .into_iter()
                    .filter_map(|seg| seg.utf8)
                    .collect::<String>()
                    .replace('\n', " ")
                    .trim()
                    .to_string();
                (!text.is_empty()).then_some(TranscriptFragment { text })
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    #[serde(default)]
    playability_status: PlayabilityStatus,
    captions: Option<Captions>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayabilityStatus {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    renderer: Option<CaptionsRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionsRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
}

#[derive(Debug, Deserialize)]
struct CaptionPayload {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(default)]
    segs: Vec<CaptionSeg>,
}

#[derive(Debug, Deserialize)]
struct CaptionSeg {
    utf8: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_response_with_tracks_parses() {
        let payload = r#"{
            "playabilityStatus": { "status": "OK" },
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        { "baseUrl": "https://example.test/api/timedtext?v=abc", "languageCode": "en" },
                        { "baseUrl": "https://example.test/api/timedtext?v=abc&lang=fr", "languageCode": "fr" }
                    ]
                }
            }
        }"#;

        let player: PlayerResponse = serde_json::from_str(payload).unwrap();
        let tracks = player.captions.unwrap().renderer.unwrap().caption_tracks;
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "en");
    }

    #[test]
    fn player_response_without_captions_parses() {
        let payload = r#"{ "playabilityStatus": { "status": "ERROR" } }"#;

        let player: PlayerResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(player.playability_status.status.as_deref(), Some("ERROR"));
        assert!(player.captions.is_none());
    }

    #[test]
    fn caption_events_collect_segments() {
        let payload = r#"{
            "events": [
                { "segs": [ { "utf8": "Hello" } ] },
                { "segs": [ { "utf8": "\n" } ] },
                { "segs": [ { "utf8": "wo" }, { "utf8": "rld" } ] }
            ]
        }"#;

        let parsed: CaptionPayload = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.events.len(), 3);
        assert_eq!(parsed.events[2].segs.len(), 2);
    }
}
