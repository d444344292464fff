//! Request and reply types for the invitation endpoint.

use serde::{Deserialize, Serialize};

/// Message returned once the provider accepted the email.
pub const SUCCESS_MESSAGE: &str = "Email sent successfully";

/// Invitation request posted by the client application.
///
/// Field names follow the client's camelCase JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRequest {
    /// Recipient address
    pub email: String,
    /// Display name of the group being joined
    pub group_name: String,
    /// Group identifier. Not used in the email body.
    pub group_id: String,
    /// One-time invitation token
    pub token: String,
}

/// JSON reply of the invitation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvitationResponse {
    Sent { success: bool, message: String },
    Failed { error: String },
}

impl InvitationResponse {
    pub fn sent() -> Self {
        InvitationResponse::Sent {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        InvitationResponse::Failed {
            error: error.into(),
        }
    }
}
