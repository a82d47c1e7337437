//! CLI-level errors (wraps domain and configuration errors)

use config::ConfigError;
use thiserror::Error;

use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot build tree: {0}")]
    Domain(#[from] DomainError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(DomainError::CapacityExhausted { .. }) => crate::exitcode::OSERR,
            CliError::Domain(_) => crate::exitcode::SOFTWARE,
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
