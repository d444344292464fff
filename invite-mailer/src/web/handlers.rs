//! Invitation endpoint handlers.
//!
//! The invitation handler runs strictly in sequence:
//! 1. Parse the JSON body
//! 2. Build the invitation email
//! 3. Post it to Resend and map the outcome
//!
//! The body is taken as raw bytes so malformed JSON is reported through the
//! same `{error}` reply as provider failures.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::invite::{build_invitation_email, InvitationRequest, InvitationResponse};
use crate::provider::ResendClient;
use crate::web::error::InviteError;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resend: ResendClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resend = ResendClient::from_config(&config);
        Self {
            config: Arc::new(config),
            resend,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Invitation Email
// =============================================================================

/// Invitation email endpoint.
///
/// The `Authorization` header is logged but never enforced.
pub async fn send_invitation(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InvitationResponse>, InviteError> {
    info!(
        has_auth = headers.contains_key(AUTHORIZATION),
        body_length = body.len(),
        "invitation_request_received"
    );

    match deliver_invitation(&state, &body).await {
        Ok(()) => Ok(Json(InvitationResponse::sent())),
        Err(e) => {
            error!(
                error = %e,
                provider_status = ?e.provider_status(),
                "invitation_email_failed"
            );
            Err(e)
        }
    }
}

async fn deliver_invitation(state: &AppState, body: &[u8]) -> Result<(), InviteError> {
    let request: InvitationRequest = serde_json::from_slice(body)?;

    info!(
        email = %request.email,
        group_name = %request.group_name,
        group_id = %request.group_id,
        "invitation_email_sending"
    );

    let config = &state.config;
    info!(
        api_key_configured = state.resend.has_api_key(),
        email_from = %config.email_from,
        email_from_from_env = config.email_from_from_env,
        "invitation_sender_resolved"
    );

    let email = build_invitation_email(config, &request);
    let email_id = state.resend.send_email(&email).await?;

    info!(
        email = %request.email,
        email_id = ?email_id,
        "invitation_email_sent"
    );

    Ok(())
}
