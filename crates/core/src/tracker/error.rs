use thiserror::Error;

/// Errors raised while validating incoming requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Description is required")]
    MissingDescription,
    #[error("Duration is required")]
    MissingDuration,
    #[error("Invalid duration '{0}': must be a whole number of minutes from 0 to 2147483647")]
    InvalidDuration(String),
    #[error("Invalid date '{0}'")]
    InvalidDate(String),
}
