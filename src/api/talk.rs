//! Voice chat endpoint

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use super::ApiState;
use super::upload::TempUpload;
use crate::llm::reply_or_fallback;
use crate::prompt::Prompt;
use crate::{Error, Result};

/// Reply when the provider heard no speech in the clip
pub const NO_SPEECH_REPLY: &str = "I couldn't hear anything.";

/// In-band transcription marker for a failed voice request
pub const ERROR_TRANSCRIPTION: &str = "(Error)";

/// In-band reply for a failed voice request
pub const ERROR_REPLY: &str = "Sorry, an error occurred.";

/// Voice chat response
#[derive(Debug, Serialize)]
pub struct TalkResponse {
    pub transcription: String,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Handle an audio upload end-to-end
///
/// Any failure in the pipeline collapses to an error-shaped 200 payload:
/// the voice UX reads replies out loud and must never dead-end on an HTTP
/// error.
pub async fn handle_voice_chat(
    State(state): State<Arc<ApiState>>,
    multipart: Multipart,
) -> Json<TalkResponse> {
    match process_voice(&state, multipart).await {
        Ok(response) => Json(response),
        Err(e) => {
            tracing::error!(error = %e, "voice request failed");
            Json(TalkResponse {
                transcription: ERROR_TRANSCRIPTION.to_string(),
                reply: ERROR_REPLY.to_string(),
                language: None,
            })
        }
    }
}

/// Run the voice pipeline: persist, transcribe, complete
///
/// The temp file is dropped (and removed) when this function returns, on
/// the success path and every `?` path alike.
async fn process_voice(state: &ApiState, mut multipart: Multipart) -> Result<TalkResponse> {
    let field = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| Error::InvalidInput(format!("malformed multipart body: {e}")))?
            .ok_or_else(|| Error::InvalidInput("no audio file in upload".to_string()))?;

        if field.name() == Some("file") || field.file_name().is_some() {
            break field;
        }
    };

    let file_name = field.file_name().unwrap_or("audio.wav").to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| Error::InvalidInput(format!("failed to read upload body: {e}")))?;

    let temp = TempUpload::write(&file_name, &data).await?;
    let transcription = state.stt.transcribe(temp.path()).await?;

    if transcription.text.is_empty() {
        tracing::info!("no speech detected in upload");
        return Ok(TalkResponse {
            transcription: String::new(),
            reply: NO_SPEECH_REPLY.to_string(),
            language: None,
        });
    }

    tracing::info!(
        transcript = %transcription.text,
        language = ?transcription.language,
        "voice message transcribed"
    );

    let prompt = match transcription.language.as_deref() {
        Some(language) => Prompt::with_language(&transcription.text, language),
        None => Prompt::new(&transcription.text),
    };
    let reply = reply_or_fallback(state.llm.as_ref(), &prompt).await;

    Ok(TalkResponse {
        transcription: transcription.text,
        reply,
        language: transcription.language,
    })
}
