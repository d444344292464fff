//! Small shared helpers.

pub mod redact;

pub use redact::mask_secret;
