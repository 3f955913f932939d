//! Error types for linkdeck.

use std::path::PathBuf;

/// Result type alias for linkdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, querying, or observing a reference model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An index outside `[0, count)` (or the selection sentinel, where allowed).
    #[error("index {index} is out of range for {count} entries")]
    OutOfRange { index: i64, count: usize },

    /// A caller-supplied argument failed validation.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    /// The model's selection observer slot is already taken.
    #[error("a selection observer is already bound to this model")]
    ObserverAlreadyBound,

    /// The coordinator is not bound to a live model.
    #[error("coordinator is not bound to a reference model")]
    Unbound,

    /// Catalog file I/O error.
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file has an extension other than `.toml` or `.json`.
    #[error("Unsupported catalog format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// TOML catalog parse error.
    #[error("TOML catalog parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON catalog parse error.
    #[error("JSON catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an out-of-range error.
    pub fn out_of_range(index: impl TryInto<i64>, count: usize) -> Self {
        Self::OutOfRange {
            index: index.try_into().unwrap_or(i64::MAX),
            count,
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for [`Error::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
