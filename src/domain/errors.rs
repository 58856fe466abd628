// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the option registry.
//!
//! This module defines the error types that can occur during option discovery,
//! conversion, and resolution. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for option-registry operations.
///
/// This enum represents all possible errors that can occur when resolving
/// option declarations against a property source. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use optcfg::domain::ConfigError;
///
/// fn resolve_option() -> Result<String, ConfigError> {
///     Err(ConfigError::NotFound {
///         name: "HOSTNAME".to_string(),
///     })
/// }
///
/// assert_eq!(
///     resolve_option().unwrap_err().to_string(),
///     "No configuration property found for 'HOSTNAME'"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The property source has no entry for a declaration's name.
    #[error("No configuration property found for '{name}'")]
    NotFound {
        /// The option name that was not found
        name: String,
    },

    /// A declaration's kind has no matching strategy in the table.
    #[error("No configuration type found for '{name}'")]
    TypeNotFound {
        /// The name of the declaration whose kind is unregistered
        name: String,
    },

    /// A raw value could not be converted to the declared kind.
    #[error("Invalid {kind} value for '{name}': {source}")]
    InvalidValue {
        /// The option name being converted
        name: String,
        /// The kind tag of the failing conversion
        kind: &'static str,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A resolved value was accessed as a different kind than it holds.
    #[error("Expected a {expected} value, got {actual}")]
    WrongType {
        /// The kind the accessor expected
        expected: &'static str,
        /// The kind the value actually holds
        actual: &'static str,
    },
}

/// A specialized Result type for option-registry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ConfigError::NotFound {
            name: "MISSING".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No configuration property found for 'MISSING'"
        );
    }

    #[test]
    fn test_type_not_found_error() {
        let error = ConfigError::TypeNotFound {
            name: "MYSTERY".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No configuration type found for 'MYSTERY'"
        );
    }

    #[test]
    fn test_invalid_value_error() {
        let source_error = "oops".parse::<i64>().unwrap_err();
        let error = ConfigError::InvalidValue {
            name: "MAX_FILE_SIZE".to_string(),
            kind: "long",
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("MAX_FILE_SIZE"));
        assert!(error.to_string().contains("long"));
    }

    #[test]
    fn test_wrong_type_error() {
        let error = ConfigError::WrongType {
            expected: "boolean",
            actual: "string",
        };
        assert_eq!(error.to_string(), "Expected a boolean value, got string");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
    }
}
