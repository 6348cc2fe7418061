//! Error types for vaultlint-core

/// Result type for vaultlint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a lint run before any tree is walked
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The specification could not be loaded or is malformed
    #[error(transparent)]
    Spec(#[from] vaultlint_spec::SpecError),
}
