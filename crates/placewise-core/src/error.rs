//! Shared error type across placewise crates.
//!
//! Evaluation itself never fails; these errors come from loading rules and
//! from host-side argument handling.

use thiserror::Error;

/// Stable, machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Rule configuration could not be parsed or validated.
    InvalidConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Reading rule configuration failed.
    Io,
    /// Malformed host input (CLI flags, context attributes).
    InvalidArgument,
}

impl ErrorCode {
    /// String representation used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PlacewiseError>;

/// Unified error type used by core and cli.
#[derive(Debug, Error)]
pub enum PlacewiseError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlacewiseError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlacewiseError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            PlacewiseError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            PlacewiseError::Io(_) => ErrorCode::Io,
            PlacewiseError::InvalidArgument(_) => ErrorCode::InvalidArgument,
        }
    }
}
