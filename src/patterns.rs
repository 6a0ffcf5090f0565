//! Common-pattern management module
//!
//! Handles the built-in list of insecure substrings and optional
//! file-loaded extensions to it.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Substrings flagged as insecure regardless of character variety.
/// Matched case-insensitively, anywhere in the password.
const DEFAULT_PATTERNS: &[&str] = &["password", "123", "qwerty", "admin", "letmein"];

static EXTRA_PATTERNS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Patterns file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read patterns file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Patterns file is empty")]
    EmptyFile,
}

/// Returns the extra-patterns file path.
///
/// Priority:
/// 1. Environment variable `PWD_PATTERNS_PATH`
/// 2. Default path `./assets/patterns.txt`
pub fn get_patterns_path() -> PathBuf {
    std::env::var("PWD_PATTERNS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/patterns.txt"))
}

/// Loads extra common patterns from an external file.
///
/// The built-in patterns are always active; this only extends the list,
/// so calling it is optional. One pattern per line, matched
/// case-insensitively as a substring.
///
/// # Environment Variable
///
/// Set `PWD_PATTERNS_PATH` to specify a custom file location.
/// If not set, defaults to `./assets/patterns.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_patterns() -> Result<usize, PatternsError> {
    let path = get_patterns_path();
    init_patterns_from_path(&path)
}

/// Loads extra common patterns from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying
/// on environment variables. Idempotent: returns the loaded count
/// without re-reading if already initialized.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_patterns_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, PatternsError> {
    {
        let guard = EXTRA_PATTERNS.read().unwrap();
        if let Some(patterns) = guard.as_ref() {
            return Ok(patterns.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Patterns initialization FAILED: FileNotFound {}", path.display());
        return Err(PatternsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Patterns initialization FAILED: Empty file {}", path.display());
        return Err(PatternsError::EmptyFile);
    }

    let patterns: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = patterns.len();
    {
        let mut guard = EXTRA_PATTERNS.write().unwrap();
        *guard = Some(patterns);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Patterns initialized: {} extra patterns from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the currently active pattern list, built-in
/// patterns first, then any file-loaded extras.
pub fn get_patterns() -> Vec<String> {
    let mut patterns: Vec<String> = DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect();
    let guard = EXTRA_PATTERNS.read().unwrap();
    if let Some(extra) = guard.as_ref() {
        patterns.extend(extra.iter().cloned());
    }
    patterns
}

/// Checks whether the password contains any active pattern as a
/// case-insensitive substring.
pub fn contains_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if DEFAULT_PATTERNS.iter().any(|p| lowered.contains(p)) {
        return true;
    }
    let guard = EXTRA_PATTERNS.read().unwrap();
    guard
        .as_ref()
        .map(|extra| extra.iter().any(|p| lowered.contains(p.as_str())))
        .unwrap_or(false)
}

/// Resets the extra patterns for testing purposes.
#[cfg(test)]
pub fn reset_patterns_for_testing() {
    let mut guard = EXTRA_PATTERNS.write().unwrap();
    *guard = None;
}
