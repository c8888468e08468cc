//! Validation utilities shared by the server and the browser bindings

use crate::models::{MAX_SCORE, MIN_SCORE};

// ============================================================================
// Email
// ============================================================================

/// Validate an email against the `local@domain.tld` shape, ASCII case-insensitive:
///
/// - local part: one or more of `A-Z 0-9 . _ % + -`
/// - domain: one or more of `A-Z 0-9 . -`, then a dot
/// - top-level domain: two or more letters
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    const INVALID: &str = "Invalid email address";

    let (local, domain) = email.split_once('@').ok_or(INVALID)?;
    if local.is_empty() || !local.chars().all(is_local_char) {
        return Err(INVALID);
    }

    // The TLD cannot hold a dot, so it starts after the last one.
    let (host, tld) = domain.rsplit_once('.').ok_or(INVALID)?;
    if host.is_empty() || !host.chars().all(is_domain_char) {
        return Err(INVALID);
    }
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(INVALID);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

// ============================================================================
// Scores
// ============================================================================

/// Clamp a user-supplied minimum-score threshold onto the 0-10 scale
pub fn clamp_threshold(value: i64) -> i32 {
    value.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as i32
}

/// Validate that a stored score is on the 0-10 scale
pub fn validate_score(score: i32) -> Result<(), &'static str> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err("Score must be between 0 and 10");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("USER@EXAMPLE.COM").is_ok());
        assert!(validate_email("first.last+tag@mail.co.uk").is_ok());
        assert!(validate_email("a_b%c-d@sub-domain.example.io").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@example").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@example.c").is_err());
        assert!(validate_email("user@example.c0m").is_err());
        assert!(validate_email("us er@example.com").is_err());
        assert!(validate_email("user@exa@mple.com").is_err());
        assert!(validate_email("usér@example.com").is_err());
    }

    #[test]
    fn test_validate_email_dotted_host() {
        // The host part may itself end with a dot before the TLD.
        assert!(validate_email("user@example..com").is_ok());
    }

    #[test]
    fn test_clamp_threshold() {
        assert_eq!(clamp_threshold(-4), 0);
        assert_eq!(clamp_threshold(0), 0);
        assert_eq!(clamp_threshold(7), 7);
        assert_eq!(clamp_threshold(42), 10);
    }

    #[test]
    fn test_validate_score() {
        assert!(validate_score(0).is_ok());
        assert!(validate_score(10).is_ok());
        assert!(validate_score(-1).is_err());
        assert!(validate_score(11).is_err());
    }
}
