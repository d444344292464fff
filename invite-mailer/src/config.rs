//! Configuration module for environment variable parsing.
//!
//! Everything is read once at startup. Missing values fall back to the
//! defaults the hosted function used.

use std::env;
use tracing::warn;

/// Sender address used when `EMAIL_FROM` is unset.
pub const DEFAULT_EMAIL_FROM: &str = "noreply@pureborn.in";

/// Application base URL used when `APP_URL` is unset.
pub const DEFAULT_APP_URL: &str = "https://yourapp.com";

/// Resend API base URL used when `RESEND_API_URL` is unset.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API key, sent as a bearer credential
    pub resend_api_key: Option<String>,

    /// Base URL of the Resend REST API
    pub resend_api_url: String,

    /// Sender address for invitation emails
    pub email_from: String,

    /// Whether `email_from` came from the environment
    pub email_from_from_env: bool,

    /// Public application URL that invitation links point into
    pub app_url: String,

    /// Database credentials. Carried for parity with the hosted function,
    /// the send path never touches the database.
    pub database: DatabaseConfig,

    /// Port for the web server to listen on
    pub port: u16,
}

/// Supabase connection credentials.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub service_role_key: Option<String>,
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        non_empty(&self.url).is_some() && non_empty(&self.service_role_key).is_some()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let email_from = env::var("EMAIL_FROM").ok().filter(|v| !v.trim().is_empty());

        Config {
            resend_api_key: env::var("RESEND_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            resend_api_url: base_url("RESEND_API_URL", DEFAULT_RESEND_API_URL),

            email_from_from_env: email_from.is_some(),
            email_from: email_from.unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),

            app_url: base_url("APP_URL", DEFAULT_APP_URL),

            database: DatabaseConfig {
                url: env::var("SUPABASE_URL").ok(),
                service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
            },

            port: env::var("PORT")
                .ok()
                .and_then(|v| match v.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!(env_var = "PORT", value = %v, "Invalid port, using default");
                        None
                    }
                })
                .unwrap_or(8080),
        }
    }
}

/// Read a base URL, trimming any trailing slash so paths can be appended.
fn base_url(name: &str, default: &str) -> String {
    let raw = env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    normalize_base_url(&raw)
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://app.example.com/"), "https://app.example.com");
        assert_eq!(normalize_base_url("https://app.example.com//"), "https://app.example.com");
        assert_eq!(normalize_base_url(" https://app.example.com "), "https://app.example.com");
        assert_eq!(normalize_base_url("https://app.example.com"), "https://app.example.com");
    }

    #[test]
    fn test_base_url_env() {
        env::set_var("TEST_BASE_URL", "http://localhost:3000/");
        assert_eq!(base_url("TEST_BASE_URL", DEFAULT_APP_URL), "http://localhost:3000");
        env::remove_var("TEST_BASE_URL");
    }

    #[test]
    fn test_base_url_default() {
        assert_eq!(base_url("NONEXISTENT_BASE_URL", DEFAULT_APP_URL), DEFAULT_APP_URL);
    }

    #[test]
    fn test_database_is_configured() {
        assert!(!DatabaseConfig::default().is_configured());

        let partial = DatabaseConfig {
            url: Some("https://db.supabase.co".to_string()),
            service_role_key: Some("  ".to_string()),
        };
        assert!(!partial.is_configured());

        let full = DatabaseConfig {
            url: Some("https://db.supabase.co".to_string()),
            service_role_key: Some("service-key".to_string()),
        };
        assert!(full.is_configured());
    }
}
