//! Error types for the Shift Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Configuration problems are detected once at load time; the calculation
//! itself is total over validated inputs and never fails.

use thiserror::Error;

/// The main error type for the Shift Salary Engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration content failed validation at load time.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A shift interval was rejected before calculation.
    #[error("Invalid shift interval: {message}")]
    InvalidInterval {
        /// A description of what made the interval invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "base hourly rate must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: base hourly rate must not be negative"
        );
    }

    #[test]
    fn test_invalid_interval_displays_message() {
        let error = EngineError::InvalidInterval {
            message: "end time must be after start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift interval: end time must be after start time"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_interval() -> EngineResult<()> {
            Err(EngineError::InvalidInterval {
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_interval()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
