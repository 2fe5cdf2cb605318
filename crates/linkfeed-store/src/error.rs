use linkfeed_shared::ValidationError;
use thiserror::Error;

/// Errors produced by store mutations.
///
/// References to ids that no longer exist are not errors: those operations
/// are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Blank required input, or a mutation attempted before signup.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
