use thiserror::Error;

/// Coarse classification of [`AppError`], used for logging and loop policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Protocol,
    Validation,
    Classification,
    Delivery,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Endpoint returned {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Unexpected type of {field}: expected {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Empty response payload")]
    EmptyPayload,

    #[error("Missing key in response: {0}")]
    MissingKey(String),

    #[error("Missing field in homework: {0}")]
    MissingField(&'static str),

    #[error("Invalid field in homework: {0}")]
    InvalidField(&'static str),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Message delivery failed: {0}")]
    Delivery(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Configuration(_) => ErrorKind::Configuration,
            AppError::Connection(_) | AppError::Request(_) => ErrorKind::Transport,
            AppError::HttpStatus { .. } => ErrorKind::Protocol,
            AppError::Decode(_)
            | AppError::UnexpectedType { .. }
            | AppError::EmptyPayload
            | AppError::MissingKey(_) => ErrorKind::Validation,
            AppError::MissingField(_) | AppError::InvalidField(_) | AppError::UnknownStatus(_) => {
                ErrorKind::Classification
            }
            AppError::Delivery(_) => ErrorKind::Delivery,
        }
    }
}
