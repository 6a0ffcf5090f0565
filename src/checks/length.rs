//! Length check - minimum password length.

use secrecy::{ExposeSecret, SecretString};

use super::CheckResult;
use crate::types::Feedback;

const MIN_LENGTH: usize = 8;

/// Checks that the password has at least 8 characters.
///
/// Length counts code points, not bytes, so multi-byte input is not
/// over-counted.
pub fn length_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Feedback::TooShort);
    }
    None
}
