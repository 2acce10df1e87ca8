//! Credbot Gateway - Help-chat voice assistant backend for IITGN-Cred
//!
//! This library provides the core functionality for the credbot backend:
//! - Text chat proxying to a chat-completion provider
//! - Voice chat: upload, transcription, then completion
//! - Fixed-persona prompt assembly
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  IITGN-Cred Frontend                 │
//! │        help-chat widget  │  voice recorder          │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Credbot Gateway                      │
//! │   /chat  │  /talk (temp file + STT)  │  prompt      │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │              External providers                      │
//! │   Whisper STT  │  Gemini chat completion            │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod stt;

pub use api::{ApiServer, ApiState};
pub use config::Config;
pub use error::{Error, Result};
pub use llm::{CompletionProvider, FALLBACK_REPLY, GeminiCompletion};
pub use prompt::{Prompt, SYSTEM_PROMPT};
pub use stt::{Transcriber, Transcription, WhisperTranscriber};
