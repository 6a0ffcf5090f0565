//! Character-class checks - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::CheckResult;
use crate::types::Feedback;

/// The fixed special-character set accepted by the special check and
/// used by the generator.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Checks for at least one ASCII uppercase letter (A-Z).
pub fn uppercase_check(password: &SecretString) -> CheckResult {
    has_class(password, |c| c.is_ascii_uppercase(), Feedback::MissingUppercase)
}

/// Checks for at least one ASCII lowercase letter (a-z).
pub fn lowercase_check(password: &SecretString) -> CheckResult {
    has_class(password, |c| c.is_ascii_lowercase(), Feedback::MissingLowercase)
}

/// Checks for at least one ASCII digit (0-9).
pub fn digit_check(password: &SecretString) -> CheckResult {
    has_class(password, |c| c.is_ascii_digit(), Feedback::MissingDigit)
}

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_check(password: &SecretString) -> CheckResult {
    has_class(password, |c| SPECIAL_CHARS.contains(c), Feedback::MissingSpecial)
}

fn has_class(
    password: &SecretString,
    pred: impl Fn(char) -> bool,
    missing: Feedback,
) -> CheckResult {
    if password.expose_secret().chars().any(pred) {
        None
    } else {
        Some(missing)
    }
}
