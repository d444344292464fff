//! Invitation module.
//!
//! This module provides:
//! - The inbound request record and the JSON replies
//! - The invitation link, subject and HTML body
//!
//! ## Flow
//!
//! ```text
//! POST body → InvitationRequest → OutboundEmail → Resend → InvitationResponse
//! ```

pub mod template;
pub mod types;

pub use template::{
    build_invitation_email, invitation_link, invitation_subject, render_invitation_html,
    signup_link,
};
pub use types::{InvitationRequest, InvitationResponse, SUCCESS_MESSAGE};
