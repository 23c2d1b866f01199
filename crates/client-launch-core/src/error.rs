//! Error types for loading client descriptors and view configuration

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading the data a client screen is built from.
///
/// Rendering itself never fails: unknown stages and action kinds fall back
/// to documented no-ops. Only the loaders return these.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Parsing Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Descriptor Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid client descriptor: {message}")]
    InvalidDescriptor { message: String },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Check if the caller can continue with defaults
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Toml(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::invalid_descriptor("name is empty");
        assert_eq!(err.to_string(), "Invalid client descriptor: name is empty");

        let err = Error::invalid_url("not a url", url::ParseError::RelativeUrlWithoutBase);
        assert!(err.to_string().contains("'not a url'"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_from_toml_is_recoverable() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_context_preserves_error() {
        let result: std::result::Result<(), Error> = Err(Error::invalid_descriptor("empty"));
        let err = result.context("loading client").unwrap_err();
        assert!(matches!(err, Error::InvalidDescriptor { .. }));
    }
}
