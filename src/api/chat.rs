//! Text chat endpoint

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::llm::reply_or_fallback;
use crate::prompt::Prompt;

/// Text chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Text chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Handle a text message end-to-end
///
/// Provider failures never surface as HTTP errors; the handler logs them
/// and answers with the canned fallback reply. Only an empty message is a
/// client error.
pub async fn handle_text_chat(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    if request.message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let prompt = Prompt::new(&request.message);
    let reply = reply_or_fallback(state.llm.as_ref(), &prompt).await;

    Ok(Json(ChatResponse { reply }))
}

/// Chat endpoint errors
#[derive(Debug)]
pub enum ChatError {
    EmptyMessage,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            detail: &'static str,
        }

        let (status, detail) = match self {
            Self::EmptyMessage => (StatusCode::BAD_REQUEST, "Message cannot be empty"),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
