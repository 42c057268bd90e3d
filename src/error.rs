//! Error handling for wordlist-forge

use std::io;
use std::path::Path;

use thiserror::Error;

/// Main error type for wordlist-forge
#[derive(Error, Debug, Clone)]
pub enum WordlistError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        kind: io::ErrorKind,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl WordlistError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an IO error from its underlying cause
    pub fn io(err: &io::Error, path: Option<&Path>) -> Self {
        Self::Io {
            message: err.to_string(),
            path: path.map(|p| p.to_string_lossy().to_string()),
            kind: err.kind(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the failure was caused by bad input rather than the environment
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => {
                format!("❌ Invalid argument: {}\n💡 Use --help for usage information", message)
            }
            Self::Io { message, path, kind } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                let hint = match kind {
                    io::ErrorKind::PermissionDenied => "Check file permissions",
                    io::ErrorKind::NotFound => "Check that the output directory exists",
                    _ => "Check free disk space and output path",
                };
                format!("❌ File error{}: {}\n💡 {}", path_info, message, hint)
            }
            Self::Prompt { message } => {
                format!("❌ Confirmation failed: {}\n💡 Pass --yes to skip the prompt", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<io::Error> for WordlistError {
    fn from(err: io::Error) -> Self {
        Self::io(&err, None)
    }
}

impl From<inquire::InquireError> for WordlistError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

impl From<serde_json::Error> for WordlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Failed to serialize summary: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordlistError>;

/// Helper macro for argument validation failures
#[macro_export]
macro_rules! invalid_argument {
    ($msg:expr) => {
        $crate::error::WordlistError::invalid_argument($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::invalid_argument(format!($fmt, $($arg)*))
    };
}
