//! Webhook Port - Delivery of a finished character to the remote webhook
//!
//! The webhook is an opaque HTTP endpoint. This port only distinguishes the
//! three outcomes the form cares about: accepted (2xx), rejected with a body,
//! or no response at all.

use async_trait::async_trait;
use charsheet_domain::SubmissionPayload;
use thiserror::Error;

/// Errors from a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The webhook answered with a non-2xx status
    #[error("Error del servidor: {body}")]
    Rejected { status: u16, body: String },

    /// No response was received (connection refused, DNS, TLS, ...)
    #[error("{0}")]
    Transport(String),

    /// The payload could not be turned into a request
    #[error("Datos del personaje inválidos: {0}")]
    Payload(String),
}

impl SubmitError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }

    pub fn payload(message: impl ToString) -> Self {
        Self::Payload(message.to_string())
    }

    /// Raw failure reason: the server body or the transport message
    pub fn detail(&self) -> &str {
        match self {
            Self::Rejected { body, .. } => body,
            Self::Transport(message) | Self::Payload(message) => message,
        }
    }

    /// HTTP status, when the webhook answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Successful webhook response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReceipt {
    pub status: u16,
    pub body: String,
}

impl WebhookReceipt {
    /// Body parsed as JSON, if it is JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Port for submitting a character to the webhook.
///
/// One call is one attempt: implementations must not retry.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait WebhookPort: Send + Sync {
    async fn submit(&self, payload: SubmissionPayload) -> Result<WebhookReceipt, SubmitError>;
}
