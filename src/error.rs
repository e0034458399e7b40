//! Global error handling for gut
//!
//! Only path and pattern problems (plus failing to write the listing) are
//! fatal. Per-entry failures such as dangling symlinks or unknown user ids
//! are recovered where they happen and never reach this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for gut operations
#[derive(Error, Debug)]
pub enum GutError {
    /// The target path is missing or unreadable
    #[error("Cannot read {}: {source}", path.display())]
    Path {
        /// Path that failed
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// The target path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The filter pattern does not compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing the listing failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GutError {
    /// Wrap a filesystem error for `path`
    pub fn path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Path {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the listing target
    pub fn is_path_error(&self) -> bool {
        matches!(self, Self::Path { .. } | Self::NotADirectory(_))
    }
}

/// Specialized Result type for gut operations
pub type Result<T> = std::result::Result<T, GutError>;

/// Creates a GutError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::GutError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}
