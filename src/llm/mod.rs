//! Chat-completion providers

mod gemini;

pub use gemini::GeminiCompletion;

use async_trait::async_trait;

use crate::Result;
use crate::prompt::Prompt;

/// Canned reply returned when the completion provider is unreachable
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting to my brain right now.";

/// Trait for chat-completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a reply for the assembled prompt
    ///
    /// # Errors
    ///
    /// Returns error if the provider call fails or the response is malformed
    async fn complete(&self, prompt: &Prompt) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Generate a reply, collapsing any provider failure to the fixed fallback
///
/// This is the only place provider errors are converted to user-facing
/// text; handlers stay success-shaped no matter what the upstream does.
pub async fn reply_or_fallback(provider: &dyn CompletionProvider, prompt: &Prompt) -> String {
    match provider.complete(prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(provider = provider.name(), error = %e, "completion failed, using fallback reply");
            FALLBACK_REPLY.to_string()
        }
    }
}
