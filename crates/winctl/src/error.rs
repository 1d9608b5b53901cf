use std::io;

/// Everything a subcommand can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] winctl_core::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg_attr(windows, allow(dead_code))]
    #[error("no native window backend is available on {os}")]
    Unsupported { os: &'static str },
}

impl CliError {
    /// The tag printed as `error[CODE]`.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Core(e) => e.code(),
            CliError::Io(_) => "IO_ERROR",
            CliError::Json(_) => "JSON_ERROR",
            CliError::Unsupported { .. } => "UNSUPPORTED_PLATFORM",
        }
    }
}
