//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or decoding an endpoint.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was never set on the builder.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// Port outside the unsigned 16-bit range.
    ///
    /// Carries the literal the caller passed so the message reads
    /// `invalid port -1` rather than a truncated value.
    #[error("invalid port {0}")]
    InvalidPort(i64),
    /// Input was not a canonical endpoint JSON object.
    #[error("malformed endpoint json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True if this error was raised by `build()` for an unset field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Error::MissingField(_))
    }

    /// True if this error rejected an argument at the setter.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidPort(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::MissingField("serviceName").to_string(),
            "missing required field: serviceName"
        );
        assert_eq!(Error::InvalidPort(-1).to_string(), "invalid port -1");
        assert_eq!(Error::InvalidPort(65536).to_string(), "invalid port 65536");
    }

    #[test]
    fn test_kinds() {
        assert!(Error::MissingField("serviceName").is_missing_field());
        assert!(!Error::MissingField("serviceName").is_invalid_argument());
        assert!(Error::InvalidPort(70000).is_invalid_argument());
    }
}
