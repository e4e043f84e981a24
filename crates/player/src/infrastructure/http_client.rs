//! Webhook HTTP client
//!
//! Implements the WebhookPort by POSTing the submission as
//! `multipart/form-data`. One request per call, no retry and no client-side
//! timeout.

use async_trait::async_trait;
use charsheet_domain::{FormPart, SubmissionPayload};
use reqwest::multipart::{Form, Part};
use reqwest::{header, Client};
use url::Url;

use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::{SubmitError, WebhookPort, WebhookReceipt};

/// Client for the character webhook
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    webhook_url: Url,
}

impl WebhookClient {
    pub fn new(webhook_url: Url) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            webhook_url,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(config.webhook_url.clone())
    }

    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }

    /// Turn the payload into a multipart form, preserving part order
    fn build_form(payload: SubmissionPayload) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for part in payload.into_parts() {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File { name, file } => {
                    let (file_name, mime_type, bytes) = file.into_parts();
                    let part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime_type)
                        .map_err(SubmitError::payload)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("webhook_url", &self.webhook_url.as_str())
            .finish()
    }
}

#[async_trait]
impl WebhookPort for WebhookClient {
    async fn submit(&self, payload: SubmissionPayload) -> Result<WebhookReceipt, SubmitError> {
        let form = Self::build_form(payload)?;

        tracing::debug!(url = %self.webhook_url, "Posting character to webhook");

        let response = self
            .client
            .post(self.webhook_url.clone())
            .header(header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| e.to_string());
            return Err(SubmitError::rejected(status.as_u16(), error_text));
        }

        let body = response.text().await.unwrap_or_default();
        Ok(WebhookReceipt {
            status: status.as_u16(),
            body,
        })
    }
}
