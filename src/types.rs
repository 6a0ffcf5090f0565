//! Result types for password strength evaluation.

use std::fmt;

/// Strength label derived from the 0-5 check score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    /// Maps a check score (0-5) to a label.
    ///
    /// - `0..=2` -> `Weak`
    /// - `3..=4` -> `Moderate`
    /// - `5` and above -> `Strong`
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Moderate,
            _ => Self::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Strong => write!(f, "Strong"),
        }
    }
}

/// Reason code for one unmet rule.
///
/// Logic branches on the variant; `message()` holds the human-readable
/// text so presentation stays out of the evaluation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    CommonPattern,
}

impl Feedback {
    /// Human-readable suggestion for this unmet rule.
    pub fn message(&self) -> &'static str {
        match self {
            Self::TooShort => "Password should be at least 8 characters long",
            Self::MissingUppercase => "Include at least one uppercase letter",
            Self::MissingLowercase => "Include at least one lowercase letter",
            Self::MissingDigit => "Include at least one digit",
            Self::MissingSpecial => "Include at least one special character (!@#$%^&*)",
            Self::CommonPattern => "Avoid common words or sequences",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a password strength evaluation.
///
/// `score` counts satisfied checks (0-5); `feedback` lists unmet rules
/// in check order, with `CommonPattern` always last when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub feedback: Vec<Feedback>,
}

impl StrengthReport {
    /// Label for this report's score.
    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }

    /// Rendered feedback messages, in check order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.feedback.iter().map(Feedback::message).collect()
    }
}
