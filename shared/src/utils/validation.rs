//! Email and password validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Pragmatic pattern, full RFC compliance is not the goal
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check if an email address has a plausible format
pub fn is_valid_email(email: &str) -> bool {
    email.len() >= 5 && email.len() <= 255 && EMAIL_REGEX.is_match(email)
}

/// Password policy violations, one entry per failed rule
///
/// Policy: at least 8 characters, one uppercase letter, one digit and
/// one special character.
pub fn password_policy_violations(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push("password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("password must contain at least one digit");
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        violations.push("password must contain at least one special character");
    }

    violations
}

/// Check if a password satisfies the policy
pub fn is_valid_password(password: &str) -> bool {
    password_policy_violations(password).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com "));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_valid_password() {
        assert!(is_valid_password("Str0ng!pass"));
        assert!(password_policy_violations("Str0ng!pass").is_empty());
    }

    #[test]
    fn test_password_policy_violations() {
        let violations = password_policy_violations("weak");
        assert_eq!(violations.len(), 4);

        assert_eq!(password_policy_violations("Weakpass1!").len(), 0);
        assert_eq!(password_policy_violations("weakpass1!").len(), 1); // no uppercase
        assert_eq!(password_policy_violations("Weakpass!!").len(), 1); // no digit
        assert_eq!(password_policy_violations("Weakpass11").len(), 1); // no special
    }
}
