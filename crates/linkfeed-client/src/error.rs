use std::sync::PoisonError;

use serde::{Serialize, Serializer};
use thiserror::Error;

use linkfeed_shared::ValidationError;
use linkfeed_store::StoreError;

/// Errors returned by command handlers.
///
/// Serialises as its display string so the presentation layer can show it
/// as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{0} requires a Pro subscription")]
    ProRequired(&'static str),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<ValidationError> for ClientError {
    fn from(e: ValidationError) -> Self {
        Self::Store(StoreError::Validation(e))
    }
}

impl<T> From<PoisonError<T>> for ClientError {
    fn from(e: PoisonError<T>) -> Self {
        Self::LockPoisoned(e.to_string())
    }
}

impl Serialize for ClientError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
