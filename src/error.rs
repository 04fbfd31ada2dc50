//! Error types for market-cart
//!
//! All modules use `CartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// All errors that can occur in market-cart
#[derive(Error, Debug)]
pub enum CartError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Storage errors
    #[error("Storage error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    // Cart errors
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl CartError {
    /// Create a storage IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } | Self::TomlParse(_) => {
                Some("Run: market-cart config init --force")
            }
            Self::Io { .. } | Self::ConfigDirCreate { .. } => {
                Some("Check that the storage directory is writable (--storage-dir)")
            }
            Self::Json(_) => Some("The cart snapshot is unreadable; run: market-cart clear"),
            Self::InvalidPrice { .. } => Some("Prices must be finite numbers"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CartError::InvalidKey(String::new());
        assert!(err.to_string().contains("Invalid storage key"));
    }

    #[test]
    fn error_hint() {
        let err = CartError::io(
            "writing snapshot",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.hint().unwrap().contains("--storage-dir"));
        assert_eq!(CartError::User("nope".to_string()).hint(), None);
    }

    #[test]
    fn io_error_keeps_context() {
        let err = CartError::io(
            "reading snapshot",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "Storage error: reading snapshot");
    }
}
