//! Provider payload types.

use serde::{Deserialize, Serialize};

/// Placeholder that stands in for the HTML body in logs.
pub const HTML_PLACEHOLDER: &str = "[HTML content]";

/// Email payload posted to the provider's `/emails` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundEmail {
    /// Copy of the payload with the HTML body replaced, for logging.
    pub fn without_html(&self) -> OutboundEmail {
        OutboundEmail {
            html: HTML_PLACEHOLDER.to_string(),
            ..self.clone()
        }
    }
}

/// Success body returned by the provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentEmail {
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_html() {
        let email = OutboundEmail {
            from: "a@example.com".to_string(),
            to: "b@example.com".to_string(),
            subject: "Hi".to_string(),
            html: "<html>secret link</html>".to_string(),
        };

        let redacted = email.without_html();

        assert_eq!(redacted.html, HTML_PLACEHOLDER);
        assert_eq!(redacted.to, "b@example.com");
        assert_eq!(redacted.subject, "Hi");
    }
}
