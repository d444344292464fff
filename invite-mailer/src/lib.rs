//! Invite Mailer - group invitation emails over Resend.
//!
//! This library backs the `invite-mailer` binary, a small web server that
//! turns an invitation request into an HTML email.
//!
//! ## Flow
//!
//! ```text
//! Client → POST /send-invitation-email → Resend /emails → {success} | {error}
//! ```

pub mod config;
pub mod invite;
pub mod provider;
pub mod util;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use invite::{InvitationRequest, InvitationResponse};
pub use provider::{OutboundEmail, ResendClient, SendError};
pub use web::{create_router, AppState};
