//! # Column Errors
//!
//! Error types for column mesh generation.
//!
//! ## Error Policy
//!
//! - Configurations that cannot be represented fail at construction time
//! - Degenerate vertices are not errors: the cell is skipped and counted
//! - Errors name the offending field

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while configuring or building a column.
///
/// ## Example
///
/// ```rust
/// use doric_mesh::{ColumnConfig, ColumnError};
///
/// let err = ColumnConfig::builder().capital_height(11.0).build().unwrap_err();
/// match err {
///     ColumnError::InvalidConfig { field, .. } => assert_eq!(field, "capital_height"),
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColumnError {
    /// A configuration field holds a value the geometry cannot represent.
    #[error("Invalid column config field '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Overrides could not be parsed (malformed JSON, wrong type or unknown field).
    #[error("Invalid column overrides: {0}")]
    Overrides(String),

    /// The shaft grid resolution is outside the supported limits.
    #[error("Invalid resolution: {0}")]
    Resolution(String),
}

impl ColumnError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

impl From<config::constants::ConfigError> for ColumnError {
    fn from(err: config::constants::ConfigError) -> Self {
        Self::Resolution(err.to_string())
    }
}

impl From<serde_json::Error> for ColumnError {
    fn from(err: serde_json::Error) -> Self {
        Self::Overrides(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for column operations.
pub type ColumnResult<T> = Result<T, ColumnError>;

// =============================================================================
// TESTS
// =============================================================================
