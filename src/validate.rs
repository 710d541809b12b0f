//! Shape validation for credentials and tracking codes.
//!
//! Pure predicates, no I/O. The client calls these before anything touches
//! the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LinketrackError;

/// Minimum accepted length for the API user name.
const MIN_USER_LEN: usize = 5;

/// Correios code shape: 2 letters, 9 digits, 2 letters.
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2}[0-9]{9}[a-z]{2}$").expect("valid code pattern"));

/// API token shape: exactly 64 alphanumeric characters.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9a-z]{64}$").expect("valid token pattern"));

/// Whether `code` matches the 13-character Correios tracking shape.
pub fn is_valid_code(code: &str) -> bool {
    CODE_RE.is_match(code)
}

/// Check credential shape: user first, then token.
pub fn validate_credentials(user: &str, token: &str) -> Result<(), LinketrackError> {
    if user.chars().count() < MIN_USER_LEN {
        return Err(LinketrackError::Authorization(format!(
            "invalid user: must be at least {MIN_USER_LEN} characters"
        )));
    }
    if !TOKEN_RE.is_match(token) {
        return Err(LinketrackError::Authorization(
            "invalid token: must be exactly 64 alphanumeric characters".to_string(),
        ));
    }
    Ok(())
}
