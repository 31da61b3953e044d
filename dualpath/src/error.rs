//! Error types for the dualpath library.
//!
//! The path engines themselves are infallible on typed input; these errors
//! come from the dynamic boundary (JSON arguments), from configuration, and
//! from dialect or operation names supplied as text.

use thiserror::Error;

use crate::operation::Operation;

/// Result type alias for operations that may fail with a dualpath error.
///
/// # Examples
///
/// ```
/// use dualpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dualpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument had the wrong type, e.g. a number where a path string was
    /// required.
    #[error("the \"{name}\" argument must be of type {expected}, received {actual}")]
    InvalidArgumentType {
        /// Name or position of the argument, such as `paths[1]` or `from`.
        name: String,
        /// The type that was required.
        expected: &'static str,
        /// Description of the value that was received.
        actual: String,
    },

    /// An argument that must be a key-value object was something else.
    #[error("the \"{name}\" argument must be an object, received {actual}")]
    InvalidArgumentShape {
        /// Name of the argument.
        name: String,
        /// Description of the value that was received.
        actual: String,
    },

    /// An operation name was not recognized.
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// The unrecognized name.
        name: String,
    },

    /// An operation was invoked with the wrong number of arguments.
    #[error("{operation} expects {expected} argument(s), received {found}")]
    ArgumentCount {
        /// The operation being invoked.
        operation: Operation,
        /// Human-readable description of the accepted count.
        expected: &'static str,
        /// The number of arguments supplied.
        found: usize,
    },

    /// A dialect name was not recognized.
    #[error("unknown dialect '{value}': expected 'posix' or 'win32'")]
    InvalidDialect {
        /// The unrecognized value.
        value: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A result could not be converted to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if error was caused by a badly typed or shaped argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::Error;
    ///
    /// let err = Error::InvalidArgumentShape {
    ///     name: "pathObject".into(),
    ///     actual: "type string".into(),
    /// };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgumentType { .. }
                | Self::InvalidArgumentShape { .. }
                | Self::ArgumentCount { .. }
        )
    }
}
