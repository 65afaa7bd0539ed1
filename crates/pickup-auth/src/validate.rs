//! Input validation for registration and login.

/// Special characters accepted toward the password strength rule.
const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Checks that an email is structurally plausible: exactly one `@`, a
/// non-empty local part, a domain containing a dot, and no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Checks that a phone number has a plausible digit count once common
/// separators are stripped.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: Vec<char> = phone
        .chars()
        .filter(|c| !matches!(c, '+' | '-' | '.' | ' ' | '(' | ')'))
        .collect();
    digits.len() >= 10 && digits.len() <= 15 && digits.iter().all(char::is_ascii_digit)
}

/// Minimum acceptable password strength.
///
/// Configuration-defined; the default requires 8 characters with mixed
/// case, a digit, and a special character.
#[derive(Debug, Clone)]
pub struct PasswordRule {
    /// Minimum length.
    pub min_length: usize,
    /// Require at least one uppercase and one lowercase letter.
    pub require_mixed_case: bool,
    /// Require at least one digit.
    pub require_digit: bool,
    /// Require at least one special character.
    pub require_special: bool,
}

impl Default for PasswordRule {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_mixed_case: true,
            require_digit: true,
            require_special: true,
        }
    }
}

impl PasswordRule {
    /// A length-only rule.
    #[must_use]
    pub const fn length_only(min_length: usize) -> Self {
        Self {
            min_length,
            require_mixed_case: false,
            require_digit: false,
            require_special: false,
        }
    }

    /// Validates a candidate password against the rule.
    ///
    /// # Errors
    ///
    /// Returns every unmet requirement, joined into one message. The
    /// candidate itself never appears in the message.
    pub fn validate(&self, password: &str) -> Result<(), String> {
        let mut errors = Vec::new();

        if password.chars().count() < self.min_length {
            errors.push(format!(
                "password must be at least {} characters long",
                self.min_length
            ));
        }
        if self.require_mixed_case {
            if !password.chars().any(|c| c.is_ascii_uppercase()) {
                errors.push("password must contain an uppercase letter".to_string());
            }
            if !password.chars().any(|c| c.is_ascii_lowercase()) {
                errors.push("password must contain a lowercase letter".to_string());
            }
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("password must contain a number".to_string());
        }
        if self.require_special && !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            errors.push(format!(
                "password must contain a special character ({SPECIAL_CHARS})"
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("john.doe+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@@x.com"));
    }

    #[test]
    fn phone_validation() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("not-a-number"));
    }

    #[test]
    fn default_rule_accepts_strong_password() {
        assert!(PasswordRule::default().validate("Str0ng!Pass").is_ok());
    }

    #[test]
    fn default_rule_collects_all_failures() {
        let err = PasswordRule::default().validate("short").unwrap_err();

        assert!(err.contains("at least 8 characters"));
        assert!(err.contains("uppercase"));
        assert!(err.contains("number"));
        assert!(err.contains("special character"));
        // The candidate never appears in the message.
        assert!(!err.contains("short"));
    }

    #[test]
    fn length_only_rule() {
        let rule = PasswordRule::length_only(6);
        assert!(rule.validate("simple").is_ok());
        assert!(rule.validate("five5").is_err());
    }
}
