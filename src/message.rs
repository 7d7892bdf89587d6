//! Chat messages and the `/api/chat` wire types.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Who authored a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the visitor.
    User,
    /// Produced by the answer service (or the fallback text).
    Bot,
}

impl Sender {
    /// CSS class applied to bubbles from this sender.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
        }
    }
}

/// A single rendered message bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Text content, rendered verbatim.
    pub text: String,
    /// Author of the message.
    pub sender: Sender,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// Create a bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The visitor's question.
    pub question: String,
}

/// Response body from `POST /api/chat`.
///
/// The service answers either `{"answer": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ChatReply {
    /// Successful answer.
    Answer {
        /// Answer text.
        answer: String,
    },
    /// Service-reported failure.
    Error {
        /// Error detail (diagnostics only).
        error: String,
    },
}

impl ChatReply {
    /// Convert into the answer text, or a service error.
    pub fn into_answer(self) -> Result<String, WidgetError> {
        match self {
            Self::Answer { answer } => Ok(answer),
            Self::Error { error } => Err(WidgetError::Service(error)),
        }
    }
}
