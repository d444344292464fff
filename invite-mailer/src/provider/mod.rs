//! Transactional email provider module.
//!
//! This module provides:
//! - The outbound payload posted to the provider
//! - The Resend REST client
//! - Error mapping for non-success provider replies

pub mod error;
pub mod resend;
pub mod types;

pub use error::{error_body_field, provider_error_message, SendError};
pub use resend::ResendClient;
pub use types::{OutboundEmail, SentEmail};
