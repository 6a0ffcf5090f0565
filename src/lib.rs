//! Password strength evaluation and generation library
//!
//! This library scores passwords against a fixed checklist and
//! generates random passwords that satisfy it.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PATTERNS_PATH`: Optional file of extra common patterns
//!   (default: `./assets/patterns.txt`); the built-in patterns are
//!   always active
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_password};
//! use secrecy::SecretString;
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password);
//! println!("Score: {}", report.score);
//! println!("Strength: {:?}", report.label());
//! for message in report.messages() {
//!     println!("- {}", message);
//! }
//!
//! // Generate a strong password
//! let generated = generate_password();
//! assert_eq!(generated.chars().count(), 14);
//! assert_eq!(
//!     evaluate_password_strength(&SecretString::new(generated.into())).score,
//!     5
//! );
//! ```

// Internal modules
mod checks;
mod evaluator;
mod generator;
mod patterns;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use generator::{generate_password, generate_password_with, GENERATED_LENGTH};
pub use patterns::{
    contains_common_pattern, get_patterns, init_patterns, init_patterns_from_path, PatternsError,
};
pub use types::{Feedback, StrengthLabel, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
