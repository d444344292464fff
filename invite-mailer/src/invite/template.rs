//! Invitation email content.
//!
//! The body is a fixed HTML document. Only the group name and the two links
//! vary between invitations.

use crate::provider::OutboundEmail;
use crate::Config;

use super::types::InvitationRequest;

/// Build the link a recipient follows to accept the invitation.
pub fn invitation_link(app_url: &str, token: &str) -> String {
    format!("{}/invite/{}", app_url, token)
}

/// Build the signup link offered to recipients without an account.
pub fn signup_link(app_url: &str) -> String {
    format!("{}/signup", app_url)
}

pub fn invitation_subject(group_name: &str) -> String {
    format!("You've been invited to join {}", group_name)
}

/// Render the invitation email body.
///
/// The group name is embedded as given.
pub fn render_invitation_html(group_name: &str, invitation_link: &str, signup_link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
    .content {{ background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }}
    .button {{ display: inline-block; padding: 12px 30px; background: #667eea; color: white; text-decoration: none; border-radius: 5px; margin: 20px 0; }}
    .footer {{ text-align: center; margin-top: 20px; color: #666; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>💰 You've Been Invited!</h1>
    </div>
    <div class="content">
      <p>Hi there!</p>
      <p>You've been invited to join the expense group <strong>"{group_name}"</strong> on SettleUp.</p>
      <p>Click the button below to accept the invitation and start splitting expenses:</p>
      <p style="text-align: center;">
        <a href="{invitation_link}" class="button">Accept Invitation</a>
      </p>
      <p>Or sign up at: <a href="{signup_link}">{signup_link}</a></p>
      <p>If you didn't expect this invitation, you can safely ignore this email.</p>
    </div>
    <div class="footer">
      <p>This invitation will expire in 30 days.</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

/// Build the provider payload for an invitation request.
pub fn build_invitation_email(config: &Config, request: &InvitationRequest) -> OutboundEmail {
    let link = invitation_link(&config.app_url, &request.token);
    let signup = signup_link(&config.app_url);

    OutboundEmail {
        from: config.email_from.clone(),
        to: request.email.clone(),
        subject: invitation_subject(&request.group_name),
        html: render_invitation_html(&request.group_name, &link, &signup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    fn test_config() -> Config {
        Config {
            resend_api_key: Some("re_test_key".to_string()),
            resend_api_url: "http://localhost:9999".to_string(),
            email_from: "invites@example.com".to_string(),
            email_from_from_env: true,
            app_url: "https://settleup.example.com".to_string(),
            database: DatabaseConfig::default(),
            port: 8080,
        }
    }

    fn test_request() -> InvitationRequest {
        InvitationRequest {
            email: "friend@example.com".to_string(),
            group_name: "Ski Trip".to_string(),
            group_id: "group-42".to_string(),
            token: "abc123".to_string(),
        }
    }

    #[test]
    fn test_invitation_link() {
        assert_eq!(
            invitation_link("https://settleup.example.com", "abc123"),
            "https://settleup.example.com/invite/abc123"
        );
    }

    #[test]
    fn test_signup_link() {
        assert_eq!(
            signup_link("https://settleup.example.com"),
            "https://settleup.example.com/signup"
        );
    }

    #[test]
    fn test_invitation_subject() {
        assert_eq!(
            invitation_subject("Ski Trip"),
            "You've been invited to join Ski Trip"
        );
    }

    #[test]
    fn test_build_invitation_email() {
        let email = build_invitation_email(&test_config(), &test_request());

        assert_eq!(email.from, "invites@example.com");
        assert_eq!(email.to, "friend@example.com");
        assert_eq!(email.subject, "You've been invited to join Ski Trip");
        assert!(email.html.contains("Ski Trip"));
        assert!(email
            .html
            .contains(r#"href="https://settleup.example.com/invite/abc123""#));
        assert!(email.html.contains("https://settleup.example.com/signup"));
        assert!(email.html.contains("expire in 30 days"));
    }

    #[test]
    fn test_group_name_embedded_verbatim() {
        for name in ["Bob's Trip", "Tom & Jerry", "Goa \"2024\""] {
            let html = render_invitation_html(name, "https://x/invite/t", "https://x/signup");

            assert!(html.contains(name), "group name {:?} missing from body", name);
        }
    }
}
