use thiserror::Error;

/// Errors related to validating core domain values.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    DuplicateCode(String),
    #[error("long url already exists: {0}")]
    DuplicateUrl(String),
    #[error("submission token already exists: {0}")]
    DuplicateToken(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors returned by the link registry.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("long url already shortened: {0}")]
    UrlConflict(String),
    #[error("no url with code: {0}")]
    NotFound(String),
    #[error("could not allocate a unique short code after {0} attempts")]
    CodeUnavailable(usize),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortCode(message),
        }
    }
}

/// Errors returned by the submission relay.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("invalid submission: {0}")]
    InvalidRequest(String),
    #[error("no submission with token: {0}")]
    NotFound(String),
    #[error("execution service error: {0}")]
    Remote(String),
    #[error("storage error: {0}")]
    Storage(String),
}
