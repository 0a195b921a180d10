use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error kinds surfaced by the CLI.
///
/// Every variant renders as a single actionable line; `exit_code` maps the kind
/// to the process exit code so scripts can distinguish bad invocations from
/// runtime failures.
#[derive(Debug, Error)]
pub enum AwtrixError {
    #[error("{0}")]
    Usage(String),

    #[error("permission denied: cannot access {}", .path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("device '{0}' is not configured")]
    NotFound(String),

    #[error("device '{0}' already exists; remove it first or pick another name")]
    DuplicateName(String),

    #[error("config file {} is corrupt ({reason}); fix it or delete it to start fresh", .path.display())]
    CorruptConfig { path: PathBuf, reason: String },

    #[error("invalid device address '{0}'; expected host, host:port or URL")]
    InvalidAddress(String),

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("request to device failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AwtrixError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AwtrixError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, AwtrixError>;
