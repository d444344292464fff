//! Secret masking for log output.

/// Number of leading characters of a secret that may appear in logs.
const VISIBLE_PREFIX: usize = 10;

/// Mask a secret, keeping only a short prefix so keys can be told apart.
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(VISIBLE_PREFIX).collect();
    format!("{}...", prefix)
}
