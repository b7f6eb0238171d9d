//! Generative chat capability used by the AI proxy.
//!
//! A [`ChatModel`] hands out single-use [`ChatSession`]s; the proxy starts a
//! new session for every question so nothing is remembered between calls.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use gemini::GeminiModel;

/// Any failure to reach or use the chat provider.
#[derive(Debug, Error)]
pub enum AiServiceError {
    /// The session could not be created (e.g. missing credentials).
    #[error("[AI] failed to start chat: {0}")]
    Construction(String),

    /// Transport-level failure talking to the provider.
    #[error("[AI] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-successful HTTP status.
    #[error("[AI] HTTP {status} from provider: {snippet}")]
    HttpStatus {
        status: reqwest::StatusCode,
        snippet: String,
    },

    /// Provider response did not contain usable text.
    #[error("[AI] failed to decode response: {0}")]
    Decode(String),

    /// Context for the prompt could not be prepared.
    #[error("[AI] failed to build context: {0}")]
    Context(String),
}

pub type AiResult<T> = Result<T, AiServiceError>;

/// Factory for chat sessions.
pub trait ChatModel: Send + Sync {
    fn start_chat(&self) -> AiResult<Box<dyn ChatSession>>;
}

/// A conversation with the provider.
#[async_trait]
pub trait ChatSession: Send {
    /// Sends one user message and returns the generated reply.
    async fn send_message(&mut self, message: &str) -> AiResult<String>;
}
