//! Domain-specific errors.

use thiserror::Error;

/// Errors produced while parsing a selection locator or line range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("locator has an empty file path")]
    EmptyPath,
    #[error("invalid line range '{0}': expected START or START-END with 1-indexed lines")]
    InvalidRange(String),
}
