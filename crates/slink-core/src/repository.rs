use crate::error::StorageError;
use crate::link::{LinkId, ShortLink};
use crate::shortcode::ShortCode;
use crate::submission::SubmissionRecord;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage for short links.
///
/// Implementations must enforce uniqueness of both the short code and the
/// long URL atomically with the write, reporting violations as
/// [`StorageError::DuplicateCode`] and [`StorageError::DuplicateUrl`].
#[async_trait]
pub trait LinkRepository: Send + Sync + 'static {
    /// Inserts a new link.
    async fn insert(&self, link: ShortLink) -> Result<()>;

    /// Retrieves the link for a given short code.
    /// Returns `None` if the code does not exist.
    async fn find_by_code(&self, code: &ShortCode) -> Result<Option<ShortLink>>;

    /// Retrieves the link that currently maps to `long_url`, if any.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>>;

    /// Replaces the long URL of the link with the given id.
    /// Returns `true` if a link matched.
    async fn update_long_url(&self, id: &LinkId, long_url: &str) -> Result<bool>;

    /// Deletes the link with the given id.
    /// Returns `true` if the link existed and was removed.
    async fn delete(&self, id: &LinkId) -> Result<bool>;
}

/// Storage for relayed submissions, keyed by judge token.
#[async_trait]
pub trait SubmissionRepository: Send + Sync + 'static {
    /// Inserts a record. Returns `Err(DuplicateToken)` if the token is already stored.
    async fn insert(&self, record: SubmissionRecord) -> Result<()>;

    /// Retrieves the record for a token, `None` if unknown.
    async fn get(&self, token: &str) -> Result<Option<SubmissionRecord>>;
}
