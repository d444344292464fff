//! Resend REST client.
//!
//! One POST to `{base_url}/emails` per invitation. There is no retry and no
//! timeout beyond the HTTP client default.
//! Reference: https://resend.com/docs/api-reference/emails/send-email

use reqwest::Client;
use tracing::{info, warn};

use super::error::{error_body_field, provider_error_message, SendError};
use super::types::{OutboundEmail, SentEmail};
use crate::util::mask_secret;
use crate::Config;

/// Client for the Resend `/emails` endpoint.
#[derive(Clone)]
pub struct ResendClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ResendClient {
    /// Create a client for the given API base URL and key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resend_api_url.clone(), config.resend_api_key.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }

    /// Send an email and return the provider's message id, if it gave one.
    pub async fn send_email(&self, email: &OutboundEmail) -> Result<Option<String>, SendError> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                warn!(to = %email.to, "resend_api_key_missing");
                return Err(SendError::MissingApiKey);
            }
        };

        let url = self.emails_url();
        let payload_log = serde_json::to_string(&email.without_html()).unwrap_or_default();

        info!(
            url = %url,
            api_key_prefix = %mask_secret(api_key),
            api_key_length = api_key.len(),
            from = %email.from,
            to = %email.to,
            payload = %payload_log,
            "resend_request_sending"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "resend_request_failed");
                SendError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        let is_json = serde_json::from_str::<serde_json::Value>(&body).is_ok();

        info!(
            status_code = status.as_u16(),
            status_text = status.canonical_reason().unwrap_or(""),
            response_body = %body,
            is_json = is_json,
            "resend_response_received"
        );

        if !status.is_success() {
            let message = provider_error_message(status, &body);
            warn!(
                status_code = status.as_u16(),
                provider_error_name = ?error_body_field(&body, "name"),
                error = %message,
                "resend_send_rejected"
            );
            return Err(SendError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SentEmail = serde_json::from_str(&body).unwrap_or_default();
        info!(to = %email.to, email_id = ?sent.id, "resend_send_accepted");

        Ok(sent.id)
    }
}
