use thiserror::Error;

pub const NAME_REQUIRED: &str = "Name is required and must be a non-empty string";
pub const INVALID_HOURS: &str = "Invalid hoursToAdd value";

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(u64),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
