use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    #[error("Message not found: {0}")]
    NotFound(String),
    #[error("Please fill in all fields: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ContactError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::Rejected(reason) => Self::ValidationError(reason),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
