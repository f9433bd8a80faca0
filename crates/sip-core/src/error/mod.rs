//! Error types and result aliases for sip operations.
//!
//! Splits failures into the ones that abort a run before any network work
//! (usage and local I/O) and the per-package ones a batch counts and skips.

use thiserror::Error;

/// Unified error type for all sip operations
#[derive(Error, Debug)]
pub enum SipError {
    // Invocation errors
    #[error("{message}")]
    Usage { message: String },

    // Per-package registry errors
    #[error("request failed for '{package}': {message}")]
    Request {
        package: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("invalid registry response for '{package}': {message}")]
    Parse {
        package: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("no release files for {package}=={version}")]
    NotFound { package: String, version: String },

    #[error("registry response for '{package}' is missing '{field}'")]
    MissingField { package: String, field: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for sip operations
pub type SipResult<T> = Result<T, SipError>;

impl SipError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a request error from any error type
    pub fn request<E>(package: &str, message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Request {
            package: package.to_string(),
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create a parse error from any error type
    pub fn parse<E>(package: &str, message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Parse {
            package: package.to_string(),
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing-field error
    pub fn missing_field(package: &str, field: &str) -> Self {
        Self::MissingField {
            package: package.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Whether a batch should count this error and move on to the next package
    pub fn is_per_package(&self) -> bool {
        matches!(
            self,
            SipError::Request { .. }
                | SipError::Parse { .. }
                | SipError::NotFound { .. }
                | SipError::MissingField { .. }
        )
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SipError::Usage { .. } => "usage",
            SipError::Request { .. } => "request",
            SipError::Parse { .. } => "parse",
            SipError::NotFound { .. } => "not_found",
            SipError::MissingField { .. } => "missing_field",
            SipError::Io { .. } => "io",
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SipError::Usage { .. } => {
                Some("Pass the path of a file with one package name per line")
            }
            SipError::Request { .. } => {
                Some("Check the package name spelling and your internet connection")
            }
            SipError::NotFound { .. } => {
                Some("The latest release may not have published any files yet")
            }
            _ => None,
        }
    }
}
