//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits match the column expectations of the schema; PostgreSQL TEXT
//! has no built-in length enforcement.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names, titles, subjects
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, messages, special requests
pub const MAX_NOTE_LEN: usize = 2000;

/// Short identifiers: pincode, age group, icon, position, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ───────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an email address: single `@` with non-empty local and domain parts.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation("email is not a valid address"));
    }
    Ok(())
}

/// Validate a phone number: optional leading `+`, then 9 to 15 digits.
pub fn validate_phone(value: &str) -> Result<(), AppError> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.len() < 9 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "phone must be 9-15 digits, optionally prefixed with +",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(validate_required_text("  ", "title", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("party", "title", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "title", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn test_phone_shapes() {
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("987654321").is_ok());
        assert!(validate_phone("12345678").is_err());
        assert!(validate_phone("+12 345 678 90").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }
}
