//! Handler error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::invite::InvitationResponse;
use crate::provider::SendError;

/// Anything that stops an invitation from being sent.
#[derive(Debug, Error)]
pub enum InviteError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Send(#[from] SendError),
}

impl InviteError {
    /// Status code the provider answered with, if the failure came from it.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            InviteError::Send(e) => e.status(),
            InviteError::InvalidBody(_) => None,
        }
    }
}

impl IntoResponse for InviteError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(InvitationResponse::failed(self.to_string())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_message() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let message = InviteError::from(err).to_string();
        assert!(message.starts_with("Invalid request body: "));
    }

    #[test]
    fn test_send_error_is_transparent() {
        let err = InviteError::from(SendError::Provider {
            status: 500,
            message: "Email service error: Internal Server Error".to_string(),
        });
        assert_eq!(err.to_string(), "Email service error: Internal Server Error");
    }

    #[test]
    fn test_provider_status() {
        let rejected = InviteError::from(SendError::Provider {
            status: 403,
            message: "Resend API error: forbidden".to_string(),
        });
        assert_eq!(rejected.provider_status(), Some(403));

        let unparsed = InviteError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(unparsed.provider_status(), None);
        assert_eq!(InviteError::from(SendError::MissingApiKey).provider_status(), None);
    }

    #[test]
    fn test_into_response_status() {
        let response = InviteError::from(SendError::MissingApiKey).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
