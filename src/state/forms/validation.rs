//! Per-field validation rules
//!
//! Every field maps to exactly one [`Rule`]. Checking a rule is a pure
//! function of the value, so the same input always yields the same message.

use super::field::{FieldName, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_WEAK: &str = "Password must be at least 8 characters long and include at least one letter, one number, and one special character";

/// Symbols that satisfy the password's special-character requirement
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '#', '?', '&'];

const PASSWORD_MIN_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// The regex crate has no lookahead, so the letter/digit/symbol checks live in
// `is_strong_password` and this pattern only constrains charset and length.
static PASSWORD_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*#?&]{8,}$").expect("password pattern compiles")
});

/// Validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// No validation
    Unchecked,
    /// Non-empty, reporting the given message otherwise
    Required(&'static str),
    Email,
    Password,
}

impl Rule {
    /// Check a value against this rule, returning the error message if it fails
    pub fn check(&self, value: &FieldValue) -> Option<&'static str> {
        match self {
            Rule::Unchecked => None,
            Rule::Required(message) => value.is_empty().then_some(*message),
            Rule::Email => {
                let text = value.as_text();
                if text.is_empty() {
                    Some(EMAIL_REQUIRED)
                } else if !is_valid_email(text) {
                    Some(EMAIL_INVALID)
                } else {
                    None
                }
            }
            Rule::Password => {
                let text = value.as_text();
                if text.is_empty() {
                    Some(PASSWORD_REQUIRED)
                } else if !is_strong_password(text) {
                    Some(PASSWORD_WEAK)
                } else {
                    None
                }
            }
        }
    }
}

impl FieldName {
    /// The validation rule for this field
    pub fn rule(&self) -> Rule {
        match self {
            Self::FirstName => Rule::Required("First Name is required"),
            Self::LastName => Rule::Required("Last Name is required"),
            Self::Username => Rule::Required("Username is required"),
            Self::Email => Rule::Email,
            Self::Password => Rule::Password,
            Self::ShowPassword => Rule::Unchecked,
            Self::PhoneNo => Rule::Required("Phone Number is required"),
            Self::Country => Rule::Required("Country is required"),
            Self::City => Rule::Required("City is required"),
            Self::PanNo => Rule::Required("PAN Number is required"),
            Self::AadharNo => Rule::Required("Aadhar Number is required"),
        }
    }
}

/// Validate a single field value, returning its error message if invalid
pub fn validate_field(name: FieldName, value: &FieldValue) -> Option<&'static str> {
    name.rule().check(value)
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// At least 8 characters from `[A-Za-z0-9@$!%*#?&]`, including a letter,
/// a digit, and one of the symbols
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
        && PASSWORD_CHARSET.is_match(value)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(&c))
}
