//! Web server module for the invitation endpoint.
//!
//! This module provides a single-purpose web server that:
//! - Accepts invitation requests as JSON
//! - Sends the invitation email through Resend
//! - Translates the provider outcome into a JSON reply
//!
//! Every failure is reported as a 500 with an `error` message.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::InviteError;
pub use handlers::{health, send_invitation, AppState, HealthResponse};
pub use router::create_router;
