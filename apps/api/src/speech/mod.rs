//! Speech-to-text adapter.
//!
//! COMPATIBILITY NOTE: the transcriber contract is infallible. On failure it
//! returns sentinel text rather than an error, and downstream logic treats
//! that string as genuine transcript content. Callers that need to react to
//! failures must compare against `TRANSCRIPTION_FAILED`.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Sentinel returned when audio could not be transcribed.
pub const TRANSCRIPTION_FAILED: &str = "Error: Could not transcribe audio.";

const TRANSCRIPTION_MODEL: &str = "whisper-large-v3";

/// Converts spoken audio bytes into text.
/// Carried in `AppState` as `Arc<dyn Transcriber>`.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Bytes, filename: &str) -> String;
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Transcriber backed by an OpenAI-compatible `/audio/transcriptions`
/// endpoint. Audio is uploaded straight from memory; nothing touches disk.
pub struct HttpTranscriber {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpTranscriber {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
        }
    }

    async fn request(&self, audio: Bytes, filename: &str) -> anyhow::Result<String> {
        let part = Part::bytes(audio.to_vec()).file_name(filename.to_string());
        let form = Form::new()
            .part("file", part)
            .text("model", TRANSCRIPTION_MODEL)
            .text("response_format", "json")
            .text("language", "en")
            .text("temperature", "0");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            anyhow::bail!("transcription API returned {status}: {body}");
        }

        parse_transcription_body(&body)
            .ok_or_else(|| anyhow::anyhow!("transcription response missing text field: {body}"))
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: Bytes, filename: &str) -> String {
        match self.request(audio, filename).await {
            Ok(text) => {
                debug!("Transcribed {filename}: {} chars", text.len());
                text
            }
            Err(e) => {
                warn!("Transcription failed for {filename}: {e}");
                TRANSCRIPTION_FAILED.to_string()
            }
        }
    }
}

fn parse_transcription_body(body: &str) -> Option<String> {
    serde_json::from_str::<TranscriptionResponse>(body)
        .ok()
        .map(|r| r.text)
}
