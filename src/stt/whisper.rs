//! Whisper provider for audio transcription

use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::SttConfig;
use crate::stt::{Transcriber, Transcription};
use crate::{Error, Result};

/// Response from the OpenAI transcription API in `verbose_json` form
#[derive(Deserialize)]
struct WhisperResponse {
    text: String,
    language: Option<String>,
}

/// Transcribes speech to text via the `OpenAI` Whisper API
pub struct WhisperTranscriber {
    client: Client,
    api_key: String,
    model: String,
}

impl WhisperTranscriber {
    /// Create a new Whisper transcriber
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing
    pub fn new(config: &SttConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config(
                "OpenAI API key required for Whisper".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// File name sent to the provider, so it can sniff the container format
    fn upload_name(path: &Path) -> String {
        path.file_name()
            .map_or_else(|| "audio.wav".to_string(), |n| n.to_string_lossy().into_owned())
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, path: &Path) -> Result<Transcription> {
        let audio = tokio::fs::read(path).await?;
        tracing::debug!(audio_bytes = audio.len(), "starting Whisper transcription");

        let part = Part::bytes(audio).file_name(Self::upload_name(path));
        let form = Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", part);

        let response = self
            .client
            .post("https://api.openai.com/v1/audio/transcriptions")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Whisper request failed");
                e
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Whisper API error");
            return Err(Error::Stt(format!("Whisper API error {status}: {body}")));
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse Whisper response");
            e
        })?;

        let text = result.text.trim().to_string();
        tracing::info!(transcript = %text, language = ?result.language, "transcription complete");

        Ok(Transcription {
            text,
            language: result.language,
        })
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_name_keeps_extension() {
        let name = WhisperTranscriber::upload_name(Path::new("/tmp/credbot-abc-clip.ogg"));
        assert_eq!(name, "credbot-abc-clip.ogg");
    }

    #[test]
    fn upload_name_falls_back_for_bare_paths() {
        assert_eq!(WhisperTranscriber::upload_name(Path::new("/")), "audio.wav");
    }

    #[test]
    fn rejects_empty_api_key() {
        let config = SttConfig {
            api_key: String::new(),
            model: "whisper-1".to_string(),
            beam_size: 5,
        };
        assert!(WhisperTranscriber::new(&config).is_err());
    }
}
