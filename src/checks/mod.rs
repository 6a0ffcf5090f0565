//! Scored password checks
//!
//! Each check inspects one aspect of the password and reports the
//! matching feedback reason when the rule is unmet.

mod classes;
mod length;

pub use classes::{digit_check, lowercase_check, special_check, uppercase_check, SPECIAL_CHARS};
pub use length::length_check;

use crate::types::Feedback;

/// Result of a single scored check.
/// - `Some(feedback)` - Check failed with a reason
/// - `None` - Check passed (contributes one point)
pub type CheckResult = Option<Feedback>;
