use std::path::PathBuf;

use crate::WindowHandle;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A failure reported by a [`Platform`](crate::Platform) backend.
///
/// Carries the native error code so it can be logged, but is never handed
/// to callers of handle operations directly: those surface
/// [`Error::InvalidHandle`] when the window has gone away and wrap anything
/// else in [`Error::Platform`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct PlatformError {
    pub code: i64,
    pub message: String,
}

impl PlatformError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window {handle} no longer exists")]
    InvalidHandle { handle: WindowHandle },

    #[error("no window matched {query}")]
    NotFound { query: String },

    #[error("no window is in the foreground")]
    NoActiveWindow,

    #[error("the system reported no monitors")]
    NoMonitor,

    #[error("window enumeration failed: {message}")]
    EnumerationFailed { message: String },

    #[error("invalid dimensions: left={left} top={top} right={right} bottom={bottom}")]
    InvalidDimensions {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    #[error("{call} failed: {source}")]
    Platform {
        call: &'static str,
        #[source]
        source: PlatformError,
    },

    #[error("{}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Stable identifier for the error kind, suitable for scripts.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidHandle { .. } => "INVALID_HANDLE",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::NoActiveWindow => "NO_ACTIVE_WINDOW",
            Error::NoMonitor => "NO_MONITOR",
            Error::EnumerationFailed { .. } => "ENUMERATION_FAILED",
            Error::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            Error::Platform { .. } => "PLATFORM_ERROR",
            Error::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Whether this error means the window is gone (or never existed).
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Error::InvalidHandle { .. })
    }
}
