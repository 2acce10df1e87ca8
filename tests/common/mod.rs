//! Shared test fixtures: mock providers and request builders

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use credbot_gateway::prompt::Prompt;
use credbot_gateway::{Error, Result, Transcriber, Transcription};

/// What the mock transcriber should do when called
pub enum TranscribeMode {
    /// Return the uploaded bytes as the transcript (for isolation tests)
    EchoContent,
    /// Return a fixed transcript and language
    Fixed {
        text: &'static str,
        language: Option<&'static str>,
    },
    /// Fail after the temp file has been written
    Fail,
}

/// One observed transcribe call
pub struct SeenUpload {
    pub path: PathBuf,
    pub existed_during_call: bool,
    pub content: Vec<u8>,
}

/// Mock transcriber that records every call it receives
pub struct MockTranscriber {
    pub mode: TranscribeMode,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<SeenUpload>>,
}

impl MockTranscriber {
    pub fn new(mode: TranscribeMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, path: &Path) -> Result<Transcription> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let existed = path.exists();
        let content = std::fs::read(path).unwrap_or_default();
        self.seen.lock().unwrap().push(SeenUpload {
            path: path.to_path_buf(),
            existed_during_call: existed,
            content: content.clone(),
        });

        match &self.mode {
            TranscribeMode::EchoContent => Ok(Transcription {
                text: String::from_utf8_lossy(&content).into_owned(),
                language: Some("en".to_string()),
            }),
            TranscribeMode::Fixed { text, language } => Ok(Transcription {
                text: (*text).to_string(),
                language: language.map(ToString::to_string),
            }),
            TranscribeMode::Fail => Err(Error::Stt("injected transcription failure".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "mock-stt"
    }
}

/// Mock completion provider with a call counter
pub struct MockCompletion {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletion {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl credbot_gateway::CompletionProvider for MockCompletion {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(Error::Completion("injected completion failure".to_string()));
        }

        Ok(format!("reply to: {}", prompt.user))
    }

    fn name(&self) -> &'static str {
        "mock-llm"
    }
}

pub const MULTIPART_BOUNDARY: &str = "credbot-test-boundary";

/// Build a multipart/form-data POST to /talk carrying one audio file
pub fn talk_request(file_name: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/talk")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Build a JSON POST to /chat
pub fn chat_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
