//! Thin client for the Gemini `generateContent` API.
//!
//! - `POST {endpoint}/models/{model}:generateContent` with the API key in the
//!   `x-goog-api-key` header.
//!
//! A [`GeminiChat`] keeps the turns of its own conversation and resends them
//! with every message; the proxy only ever sends one message per session.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ai::{AiResult, AiServiceError, ChatModel, ChatSession};
use crate::models::config::AiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini model handle holding a reusable HTTP client.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    url_generate: String,
}

impl GeminiModel {
    /// Creates a model handle from config.
    ///
    /// # Errors
    /// - [`AiServiceError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: &AiConfig) -> AiResult<Self> {
        let client = reqwest::Client::builder().build()?;

        let base = cfg.endpoint.trim().trim_end_matches('/');
        let url_generate = format!("{base}/models/{}:generateContent", cfg.model);

        Ok(Self {
            client,
            api_key: cfg
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
            model: cfg.model.clone(),
            url_generate,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ChatModel for GeminiModel {
    fn start_chat(&self) -> AiResult<Box<dyn ChatSession>> {
        let api_key = self.api_key.clone().ok_or_else(|| {
            AiServiceError::Construction("no API key configured for the chat provider".into())
        })?;

        Ok(Box::new(GeminiChat {
            client: self.client.clone(),
            api_key,
            url_generate: self.url_generate.clone(),
            history: Vec::new(),
        }))
    }
}

/// One conversation with Gemini.
pub struct GeminiChat {
    client: reqwest::Client,
    api_key: String,
    url_generate: String,
    history: Vec<Content>,
}

#[async_trait]
impl ChatSession for GeminiChat {
    async fn send_message(&mut self, message: &str) -> AiResult<String> {
        let mut contents = self.history.clone();
        contents.push(Content::user(message));

        debug!("POST {} ({} turns)", self.url_generate, contents.len());
        let resp = self
            .client
            .post(&self.url_generate)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateRequest {
                contents: &contents,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(AiServiceError::HttpStatus { status, snippet });
        }

        let out: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| AiServiceError::Decode(format!("serde error: {e}")))?;

        let reply = out.into_text()?;

        contents.push(Content::model(&reply));
        self.history = contents;

        Ok(reply)
    }
}

/* ==========================
HTTP payloads
========================== */

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }

    fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> AiResult<String> {
        let content = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .ok_or_else(|| AiServiceError::Decode("response has no candidates".into()))?;

        let text = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<String>();

        if text.is_empty() {
            return Err(AiServiceError::Decode("candidate has no text".into()));
        }
        Ok(text)
    }
}
