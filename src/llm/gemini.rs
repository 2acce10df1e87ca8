//! Gemini provider for chat completions

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::llm::CompletionProvider;
use crate::prompt::Prompt;
use crate::{Error, Result};

/// Gemini chat-completion provider
pub struct GeminiCompletion {
    client: Client,
    api_key: String,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiCompletion {
    /// Create a new Gemini completion provider
    ///
    /// # Errors
    ///
    /// Returns error if the API key is missing
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config(
                "Gemini API key required for completions".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiCompletion {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![TextPart {
                    text: prompt.system.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![TextPart {
                    text: prompt.user.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Completion(format!("Gemini request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "Gemini API error: {status} - {body}"
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Completion(format!("Failed to parse Gemini response: {e}")))?;

        let reply = result
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .ok_or_else(|| Error::Completion("Gemini response contained no text".to_string()))?;

        Ok(reply)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_api_key() {
        let config = LlmConfig {
            api_key: String::new(),
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            max_output_tokens: 256,
        };
        assert!(GeminiCompletion::new(&config).is_err());
    }

    #[test]
    fn request_serializes_to_gemini_wire_shape() {
        let request = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![TextPart {
                    text: "system".to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![TextPart {
                    text: "user".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 256,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 256);
    }
}
