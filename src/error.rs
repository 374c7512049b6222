//! Error types for Contiker

use thiserror::Error;

use crate::exec::ExecError;
use crate::pkgmanager::OsFamily;

#[derive(Error, Debug)]
pub enum ContikerError {
    #[error("Lookup failed: {0}")]
    LookupFailure(ExecError),

    #[error("Package manager `{manager}` is not available on this system")]
    Unavailable { manager: &'static str },

    #[error("No package is specified for {os}; this dependency cannot be installed on this platform")]
    PackageNotSpecified { os: OsFamily },

    #[error("Execution failed: {0}")]
    ExecFailure(ExecError),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not parse runtime output: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<ExecError> for ContikerError {
    fn from(err: ExecError) -> Self {
        match err {
            ExecError::Lookup { .. } => ContikerError::LookupFailure(err),
            _ => ContikerError::ExecFailure(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContikerError>;
