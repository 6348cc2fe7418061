//! Error types for vaultlint-cli

/// Validation passed
pub const EXIT_SUCCESS: i32 = 0;
/// Validation found issues
pub const EXIT_VALIDATION_FAILED: i32 = 1;
/// Bad arguments, paths, or specification
pub const EXIT_USAGE: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the CLI before a verdict is reached
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from vaultlint-core
    #[error(transparent)]
    Core(#[from] vaultlint_core::Error),

    /// Error from vaultlint-spec
    #[error(transparent)]
    Spec(#[from] vaultlint_spec::SpecError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Every error that stops the run is a usage or configuration problem.
    pub fn exit_code(&self) -> i32 {
        EXIT_USAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
        assert_eq!(error.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn test_spec_error_is_transparent() {
        let error = CliError::from(vaultlint_spec::SpecError::Empty {
            path: "vspec.yaml".into(),
        });
        assert_eq!(error.to_string(), "Spec file is empty: vspec.yaml");
        assert_eq!(error.exit_code(), EXIT_USAGE);
    }
}
