//! Configuration management for the credbot gateway

use crate::{Error, Result};

/// Default chat-completion model
pub const DEFAULT_LLM_MODEL: &str = "gemini-3-flash-preview";

/// Default transcription model
pub const DEFAULT_STT_MODEL: &str = "whisper-1";

/// Credbot gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Speech-to-text configuration
    pub stt: SttConfig,

    /// Chat-completion configuration
    pub llm: LlmConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
}

/// Speech-to-text configuration
#[derive(Debug, Clone)]
pub struct SttConfig {
    /// `OpenAI` API key (for Whisper transcription)
    pub api_key: String,

    /// Transcription model (e.g. "whisper-1")
    pub model: String,

    /// Decoder beam width. Quality knob honored by providers that expose
    /// one; the hosted Whisper endpoint currently ignores it.
    pub beam_size: u32,
}

/// Chat-completion configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model identifier for chat completions
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Maximum tokens in a generated reply
    pub max_output_tokens: u32,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a required API key is missing
    pub fn from_env() -> Result<Self> {
        let openai_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY required for Whisper".to_string()))?;
        let gemini_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY required for completions".to_string()))?;

        Ok(Self {
            server: ServerConfig {
                port: std::env::var("CREDBOT_PORT")
                    .or_else(|_| std::env::var("PORT"))
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            stt: SttConfig {
                api_key: openai_key,
                model: std::env::var("CREDBOT_STT_MODEL")
                    .unwrap_or_else(|_| DEFAULT_STT_MODEL.to_string()),
                beam_size: std::env::var("CREDBOT_STT_BEAM_SIZE")
                    .ok()
                    .and_then(|b| b.parse().ok())
                    .unwrap_or(5),
            },
            llm: LlmConfig {
                api_key: gemini_key,
                model: std::env::var("CREDBOT_LLM_MODEL")
                    .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
                temperature: std::env::var("CREDBOT_LLM_TEMPERATURE")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(0.7),
                max_output_tokens: std::env::var("CREDBOT_LLM_MAX_TOKENS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(256),
            },
        })
    }
}
