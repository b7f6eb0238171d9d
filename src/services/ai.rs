//! AI proxy behind `POST /api/ai`.
//!
//! Failures of the chat provider never reach the caller: they are logged and
//! replaced by [`FALLBACK_ANSWER`].

use serde::Serialize;
use serde_json::Value;

use crate::ai::{AiResult, AiServiceError, ChatModel};
use crate::domain::sales_rep::SalesRep;
use crate::dto::api::{AiAnswer, AiQuestion};
use crate::repository::SalesRepReader;

/// Answer returned whenever the chat provider cannot be used.
pub const FALLBACK_ANSWER: &str = "AI service is currently unavailable. Please try again later.";

/// Result of forwarding a question to the chat provider.
#[derive(Debug)]
pub enum AiOutcome {
    Success(String),
    Failure(AiServiceError),
}

impl From<AiResult<String>> for AiOutcome {
    fn from(result: AiResult<String>) -> Self {
        match result {
            Ok(text) => AiOutcome::Success(text),
            Err(err) => AiOutcome::Failure(err),
        }
    }
}

impl From<AiOutcome> for AiAnswer {
    fn from(outcome: AiOutcome) -> Self {
        let answer = match outcome {
            AiOutcome::Success(text) => text,
            AiOutcome::Failure(_) => FALLBACK_ANSWER.to_string(),
        };
        AiAnswer { answer }
    }
}

/// Default context: the stored records under their collection key.
#[derive(Serialize)]
struct StoredContext<'a> {
    #[serde(rename = "salesReps")]
    sales_reps: &'a [SalesRep],
}

/// Joins the serialized context and the question into a single prompt.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!("Here is the sales data in JSON format:\n{context}\n\nQuestion: {question}")
}

/// Serializes the caller's payload, or the stored records when absent.
fn serialize_context<R>(repo: &R, data: Option<&Value>) -> AiResult<String>
where
    R: SalesRepReader + ?Sized,
{
    let serialized = match data {
        Some(payload) => serde_json::to_string(payload),
        None => {
            let reps = repo.load_sales_reps()?;
            serde_json::to_string(&StoredContext { sales_reps: &reps })
        }
    };
    serialized.map_err(|err| AiServiceError::Context(err.to_string()))
}

async fn forward<R, M>(repo: &R, model: &M, request: &AiQuestion) -> AiResult<String>
where
    R: SalesRepReader + ?Sized,
    M: ChatModel + ?Sized,
{
    let context = serialize_context(repo, request.data.as_ref())?;
    let prompt = build_prompt(&context, &request.question);
    log::debug!("Sending AI prompt of {} bytes", prompt.len());

    let mut chat = model.start_chat()?;
    chat.send_message(&prompt).await
}

/// Sends the question with its context to a fresh chat session.
pub async fn ask<R, M>(repo: &R, model: &M, request: &AiQuestion) -> AiOutcome
where
    R: SalesRepReader + ?Sized,
    M: ChatModel + ?Sized,
{
    let result = forward(repo, model, request).await;

    if let Err(err) = &result {
        log::error!("AI request failed: {err}");
    }
    AiOutcome::from(result)
}

/// Answers `request`, substituting the fallback text on any failure.
pub async fn answer_question<R, M>(repo: &R, model: &M, request: AiQuestion) -> AiAnswer
where
    R: SalesRepReader + ?Sized,
    M: ChatModel + ?Sized,
{
    ask(repo, model, &request).await.into()
}
