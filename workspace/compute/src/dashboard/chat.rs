use common::{AdviceRequest, AdviceResult, CategorizationResult, CategorizeRequest};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    /// Markdown for assistant messages, literal input for user messages.
    pub text: String,
}

/// Whether a request from the assistant panel is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatStatus {
    #[default]
    Idle,
    Awaiting,
}

/// Which backend endpoint chat input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
    #[default]
    Categorize,
    Advice,
}

/// Outgoing request produced by a chat submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatRequest {
    Categorize(CategorizeRequest),
    Advice(AdviceRequest),
}

/// Append-only transcript plus the input box and busy status.
///
/// Each submission is a standalone request: earlier messages are only shown,
/// never sent to the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    input: String,
    status: ChatStatus,
    mode: ChatMode,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    pub fn is_awaiting(&self) -> bool {
        self.status == ChatStatus::Awaiting
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
    }

    /// Accepts the current input if it is not blank and nothing is in flight.
    ///
    /// On acceptance the input is moved into the transcript as a user message
    /// and the conversation waits for a reply. A rejected submission leaves
    /// everything untouched.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if self.input.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }
        if self.is_awaiting() {
            debug!("Ignoring chat submission while a reply is pending");
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage {
            role: Role::User,
            text: text.clone(),
        });
        self.status = ChatStatus::Awaiting;

        Some(match self.mode {
            ChatMode::Categorize => ChatRequest::Categorize(CategorizeRequest { description: text }),
            ChatMode::Advice => ChatRequest::Advice(AdviceRequest { prompt: text }),
        })
    }

    pub fn receive_categorization(&mut self, result: Result<CategorizationResult, ApiError>) {
        let text = match result {
            Ok(verdict) => categorization_reply(&verdict),
            Err(err) => error_reply(&err),
        };
        self.reply(text);
    }

    pub fn receive_advice(&mut self, result: Result<AdviceResult, ApiError>) {
        let text = match result {
            Ok(advice) => advice.advice,
            Err(err) => error_reply(&err),
        };
        self.reply(text);
    }

    fn reply(&mut self, text: String) {
        if !self.is_awaiting() {
            warn!("Received an assistant reply with no request in flight");
        }
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            text,
        });
        self.status = ChatStatus::Idle;
    }
}

/// `Category: **<name>** (confidence: <0.00>)`, confidence defaulting to zero.
pub fn categorization_reply(verdict: &CategorizationResult) -> String {
    format!(
        "Category: **{}** (confidence: {})",
        verdict.category,
        two_decimals(verdict.confidence.unwrap_or(0.0))
    )
}

/// Two fixed decimals with halves rounded away from zero, so `0.125` reads
/// `0.13`. Non-finite values print as-is.
fn two_decimals(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => format!(
            "{:.2}",
            decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", value),
    }
}

/// Assistant-authored error line. HTTP failures carry the status and raw body.
pub fn error_reply(err: &ApiError) -> String {
    let reason = match err {
        ApiError::Status { status, body, .. } => format!("API error! status: {} {}", status, body),
        other => other.to_string(),
    };
    format!("Sorry, I encountered an error: {}", reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(category: &str, confidence: Option<f64>) -> CategorizationResult {
        CategorizationResult {
            category: category.to_string(),
            confidence,
            description: None,
        }
    }

    #[test]
    fn test_submit_moves_input_into_transcript() {
        let mut chat = Conversation::default();
        chat.set_input("Starbucks coffee".to_string());

        let request = chat.submit();

        assert_eq!(
            request,
            Some(ChatRequest::Categorize(CategorizeRequest {
                description: "Starbucks coffee".to_string()
            }))
        );
        assert_eq!(chat.input(), "");
        assert!(chat.is_awaiting());
        assert_eq!(
            chat.messages(),
            &[ChatMessage {
                role: Role::User,
                text: "Starbucks coffee".to_string()
            }]
        );
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = Conversation::default();
        for blank in ["", "   ", "\t\n"] {
            chat.set_input(blank.to_string());
            assert_eq!(chat.submit(), None);
        }
        assert!(chat.messages().is_empty());
        assert_eq!(chat.status(), ChatStatus::Idle);
    }

    #[test]
    fn test_submission_rejected_while_awaiting() {
        let mut chat = Conversation::default();
        chat.set_input("first".to_string());
        assert!(chat.submit().is_some());

        chat.set_input("second".to_string());
        assert_eq!(chat.submit(), None);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.input(), "second");
    }

    #[test]
    fn test_categorization_reply_format() {
        assert_eq!(
            categorization_reply(&verdict("Restaurants", Some(0.87))),
            "Category: **Restaurants** (confidence: 0.87)"
        );
        assert_eq!(
            categorization_reply(&verdict("Travel", None)),
            "Category: **Travel** (confidence: 0.00)"
        );
        assert_eq!(
            categorization_reply(&verdict("Income", Some(1.0))),
            "Category: **Income** (confidence: 1.00)"
        );
    }

    #[test]
    fn test_confidence_halves_round_up() {
        assert_eq!(
            categorization_reply(&verdict("Health", Some(0.125))),
            "Category: **Health** (confidence: 0.13)"
        );
        assert_eq!(
            categorization_reply(&verdict("Travel", Some(0.375))),
            "Category: **Travel** (confidence: 0.38)"
        );
        assert_eq!(
            categorization_reply(&verdict("Travel", Some(0.5))),
            "Category: **Travel** (confidence: 0.50)"
        );
    }

    #[test]
    fn test_error_reply_includes_status_and_body() {
        let err = ApiError::Status {
            status: 422,
            status_text: "Unprocessable Entity".to_string(),
            body: "invalid description".to_string(),
        };
        assert_eq!(
            error_reply(&err),
            "Sorry, I encountered an error: API error! status: 422 invalid description"
        );

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            error_reply(&err),
            "Sorry, I encountered an error: Request failed: connection refused"
        );
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let mut chat = Conversation::default();
        chat.set_input("Starbucks coffee".to_string());
        chat.submit();

        chat.receive_categorization(Err(ApiError::Network("offline".to_string())));

        assert_eq!(chat.status(), ChatStatus::Idle);
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1].role, Role::Assistant);

        chat.set_input("again".to_string());
        assert!(chat.submit().is_some());
    }

    #[test]
    fn test_advice_mode() {
        let mut chat = Conversation::default();
        chat.set_mode(ChatMode::Advice);
        chat.set_input("How much did I spend on food?".to_string());

        let request = chat.submit();
        assert_eq!(
            request,
            Some(ChatRequest::Advice(AdviceRequest {
                prompt: "How much did I spend on food?".to_string()
            }))
        );

        chat.receive_advice(Ok(AdviceResult {
            advice: "You spent **$58.00** on groceries.".to_string(),
        }));
        assert_eq!(chat.messages()[1].text, "You spent **$58.00** on groceries.");
        assert_eq!(chat.status(), ChatStatus::Idle);
    }
}
