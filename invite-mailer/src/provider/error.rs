//! Provider error types.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

const FORBIDDEN_HINT: &str = " (Forbidden - Check: 1) API key is valid, 2) Domain is verified in Resend, 3) \"from\" email matches verified domain)";

const UNAUTHORIZED_HINT: &str = " (Unauthorized - API key is invalid or expired)";

/// Failure to hand an email to the provider.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("Email service is not configured: RESEND_API_KEY is not set")]
    MissingApiKey,

    #[error("Email request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("{message}")]
    Provider { status: u16, message: String },
}

impl SendError {
    /// Provider status code, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SendError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Build a human-readable message for a non-success provider reply.
///
/// Prefers the provider's own `message`, falls back to the status text, and
/// appends a hint for authorization failures.
pub fn provider_error_message(status: StatusCode, body: &str) -> String {
    let provider_message = error_body_field(body, "message");

    let mut message = match provider_message {
        Some(m) => format!("Resend API error: {}", m),
        None => format!(
            "Email service error: {}",
            status.canonical_reason().unwrap_or("")
        ),
    };

    match status {
        StatusCode::FORBIDDEN => message.push_str(FORBIDDEN_HINT),
        StatusCode::UNAUTHORIZED => message.push_str(UNAUTHORIZED_HINT),
        _ => {}
    }

    message
}

/// Read a field of a JSON error body, skipping empty and falsy values.
///
/// Non-string values are rendered as JSON text.
pub fn error_body_field(body: &str, key: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;

    match value.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
