//! Character sheet player crate.
//!
//! Contains the form controller, the webhook port and its reqwest adapter,
//! configuration, and view-model helpers for renderers.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod presentation;
pub mod state;

use std::sync::Arc;

pub use application::{FormController, FormEvent, Notification};
pub use infrastructure::{PlayerConfig, WebhookClient};
pub use state::{FormSnapshot, SubmissionStatus};

/// Start an editing session that submits to the configured webhook.
pub fn new_session(config: &PlayerConfig) -> FormController {
    tracing::info!(webhook_url = %config.webhook_url, "Starting character sheet session");
    FormController::new(Arc::new(WebhookClient::from_config(config)))
}
