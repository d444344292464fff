//! Route table.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{health, send_invitation, AppState};

/// Path the invitation endpoint is mounted on besides `/`.
pub const INVITATION_PATH: &str = "/send-invitation-email";

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(send_invitation))
        .route(INVITATION_PATH, post(send_invitation))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
