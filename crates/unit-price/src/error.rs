//! Error types
//!
//! The comparator core is infallible; these cover configuration, the offline
//! asset cache and the command line.

use thiserror::Error;

use crate::offline::FetchError;

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, UnitPriceError>;

/// Errors surfaced outside the comparator core
#[derive(Debug, Error)]
pub enum UnitPriceError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Asset cache installation failed
    #[error("Cache install failed for {url}: {source}")]
    CacheInstall {
        /// Asset that could not be fetched
        url: String,
        /// Underlying fetch failure
        #[source]
        source: FetchError,
    },

    /// Fetch through the asset cache failed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl UnitPriceError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = UnitPriceError::config("missing cache name");
        assert_eq!(err.to_string(), "Configuration error: missing cache name");
    }

    #[test]
    fn test_cache_install_display() {
        let err = UnitPriceError::CacheInstall {
            url: "/price-checker/style.css".into(),
            source: FetchError::Offline,
        };
        assert!(err.to_string().contains("/price-checker/style.css"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_fetch_error() {
        let err: UnitPriceError = FetchError::Offline.into();
        assert!(matches!(err, UnitPriceError::Fetch(FetchError::Offline)));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: UnitPriceError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_invalid_argument() {
        let err = UnitPriceError::invalid_argument("bad key");
        assert!(matches!(err, UnitPriceError::InvalidArgument { .. }));
    }
}
