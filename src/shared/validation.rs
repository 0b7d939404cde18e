use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating phone numbers
    /// Optional leading "+" followed by 10-15 digits, no separators
    /// - Valid: "+37012345678", "5551234567"
    /// - Invalid: "12345", "555-123-4567", "+370 123 45678"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{10,15}$").unwrap();
}

/// Rejects strings that are empty or whitespace-only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+37012345678"));
        assert!(PHONE_REGEX.is_match("5551234567"));
        assert!(PHONE_REGEX.is_match("905551234567"));
        assert!(PHONE_REGEX.is_match("123456789012345"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("12345")); // too short
        assert!(!PHONE_REGEX.is_match("1234567890123456")); // too long
        assert!(!PHONE_REGEX.is_match("555-123-4567")); // separators
        assert!(!PHONE_REGEX.is_match("+370 123 45678")); // spaces
        assert!(!PHONE_REGEX.is_match("++37012345678")); // double plus
        assert!(!PHONE_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("sokak lambası arızalı").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }
}
