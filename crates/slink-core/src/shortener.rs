use crate::link::{LinkId, ShortLink};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// The link registry.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a short link for `long_url` and returns the stored link.
    async fn shorten(&self, long_url: String) -> Result<ShortLink>;

    /// Resolves a short code to its link, failing with `NotFound` if unknown.
    async fn redirect(&self, code: &ShortCode) -> Result<ShortLink>;

    /// Points an existing link at a new long URL.
    /// Returns `false` when no link has the given id; nothing is changed then.
    async fn update(&self, id: &LinkId, long_url: String) -> Result<bool>;

    /// Deletes a link. Returns `false` when no link has the given id.
    async fn delete(&self, id: &LinkId) -> Result<bool>;
}
