use thiserror::Error;

/// Caller-correctable input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("You need to sign up first")]
    NotSignedIn,
}
