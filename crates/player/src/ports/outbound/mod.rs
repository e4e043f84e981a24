//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the form controller to reach the webhook without depending on a
//! concrete HTTP client.

pub mod webhook_port;

#[cfg(any(test, feature = "testing"))]
pub use webhook_port::MockWebhookPort;
pub use webhook_port::{SubmitError, WebhookPort, WebhookReceipt};
