//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{
    digit_check, length_check, lowercase_check, special_check, uppercase_check, CheckResult,
};
use crate::patterns::contains_common_pattern;
use crate::types::{Feedback, StrengthReport};

/// Evaluates password strength and returns a detailed report.
///
/// Pure and total: the same input always yields the same report and no
/// input can fail. Each of the five scored checks adds one point when
/// satisfied and one feedback reason when not; the common-pattern scan
/// only ever adds feedback, never points.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthReport` containing score and feedback reasons.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    // Orchestrator: execute scored checks in their fixed order
    let checks: [fn(&SecretString) -> CheckResult; 5] = [
        length_check,
        uppercase_check,
        lowercase_check,
        digit_check,
        special_check,
    ];

    for check in checks {
        match check(password) {
            Some(reason) => feedback.push(reason),
            None => score += 1,
        }
    }

    // Common patterns are reported after the scored checks and do not
    // affect the score, so a Strong password can still carry this flag.
    if contains_common_pattern(password.expose_secret()) {
        feedback.push(Feedback::CommonPattern);
    }

    StrengthReport { score, feedback }
}

/// Async version that sends the report via channel after a short
/// debounce, skipping the send if the token was cancelled meanwhile.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before dispatch");
        return;
    }

    let report = evaluate_password_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthLabel;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate_password_strength(&secret(""));

        assert_eq!(report.score, 0);
        assert_eq!(report.label(), StrengthLabel::Weak);
        // All five scored checks fail; the pattern scan is vacuously false
        assert_eq!(
            report.feedback,
            vec![
                Feedback::TooShort,
                Feedback::MissingUppercase,
                Feedback::MissingLowercase,
                Feedback::MissingDigit,
                Feedback::MissingSpecial,
            ]
        );
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let report = evaluate_password_strength(&secret("abc"));

        assert_eq!(report.score, 1);
        assert_eq!(report.label(), StrengthLabel::Weak);
        assert_eq!(
            report.feedback,
            vec![
                Feedback::TooShort,
                Feedback::MissingUppercase,
                Feedback::MissingDigit,
                Feedback::MissingSpecial,
            ]
        );
    }

    #[test]
    fn test_evaluate_moderate_password() {
        // Length, uppercase, lowercase, digit; no special char
        let report = evaluate_password_strength(&secret("Abcdefg7"));

        assert_eq!(report.score, 4);
        assert_eq!(report.label(), StrengthLabel::Moderate);
        assert_eq!(report.feedback, vec![Feedback::MissingSpecial]);
    }

    #[test]
    fn test_evaluate_strong_password_no_feedback() {
        // Exactly 8 characters, all classes, no common substring
        let report = evaluate_password_strength(&secret("Xk9!mQrv"));

        assert_eq!(report.score, 5);
        assert_eq!(report.label(), StrengthLabel::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_strong_with_common_pattern() {
        // All five checks pass, but "password" and "123" are substrings
        let report = evaluate_password_strength(&secret("Password123!"));

        assert_eq!(report.score, 5);
        assert_eq!(report.label(), StrengthLabel::Strong);
        assert_eq!(report.feedback, vec![Feedback::CommonPattern]);
    }

    #[test]
    fn test_evaluate_common_pattern_reported_last() {
        // "qwerty" hit plus missing digit and special char
        let report = evaluate_password_strength(&secret("Qwertyuiop"));

        assert_eq!(report.score, 3);
        assert_eq!(report.label(), StrengthLabel::Moderate);
        assert_eq!(
            report.feedback,
            vec![
                Feedback::MissingDigit,
                Feedback::MissingSpecial,
                Feedback::CommonPattern,
            ]
        );
    }

    #[test]
    fn test_evaluate_pattern_match_is_case_insensitive() {
        let report = evaluate_password_strength(&secret("AdMiN#42xy"));

        assert_eq!(report.score, 5);
        assert_eq!(report.feedback, vec![Feedback::CommonPattern]);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let pwd = secret("MyPass123!");
        let first = evaluate_password_strength(&pwd);
        let second = evaluate_password_strength(&pwd);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_score_bounds() {
        for pwd in ["", "a", "MyPass123!", "VeryStrongValue#9!xz"] {
            let report = evaluate_password_strength(&secret(pwd));
            assert!(report.score <= 5, "Score {} out of bounds for '{}'", report.score, pwd);
        }
    }
}
