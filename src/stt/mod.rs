//! Speech-to-text providers

mod whisper;

pub use whisper::WhisperTranscriber;

use std::path::Path;

use async_trait::async_trait;

use crate::Result;

/// Result of transcribing one audio file
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Recognized text, trimmed; empty when no speech was detected
    pub text: String,

    /// Detected spoken language code, when the provider reports one
    pub language: Option<String>,
}

/// Trait for speech-to-text providers
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `path`
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the provider call fails
    async fn transcribe(&self, path: &Path) -> Result<Transcription>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
