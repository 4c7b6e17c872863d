use async_trait::async_trait;
use slink_core::{
    LinkId, LinkRepository, ShortCode, ShortLink, Shortener, ShortenerError, StorageError,
};
use slink_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// How many generated codes are tried before giving up on a shorten request.
pub const MAX_CODE_ATTEMPTS: usize = 3;

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`LinkRepository`] and a [`Generator`] to handle:
/// - URL validation
/// - Short code generation, redrawing when storage reports a taken code
/// - Mapping storage uniqueness violations to domain conflicts
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: LinkRepository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    /// Validates that the URL is an absolute URI and returns its normalized form.
    ///
    /// The normalized form is what gets stored and compared. Parsing strips
    /// tabs and newlines and encodes non-ASCII text, so the result is always a
    /// valid `Location` header value.
    fn validate_url(url: &str) -> Result<Url, ShortenerError> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_string()));
        }

        Url::parse(url).map_err(|e| ShortenerError::InvalidUrl(format!("{url:?}: {e}")))
    }
}

#[async_trait]
impl<R: LinkRepository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, long_url: String) -> Result<ShortLink, ShortenerError> {
        let long_url = String::from(Self::validate_url(&long_url)?);

        // Friendly early answer; the unique index still decides under races.
        if let Some(existing) = self
            .repository
            .find_by_long_url(&long_url)
            .await
            .map_err(storage_to_shortener_error)?
        {
            debug!(code = %existing.code, url = %long_url, "long url already shortened");
            return Err(ShortenerError::UrlConflict(long_url));
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let link = ShortLink::new(self.generator.generate(), long_url.clone());

            match self.repository.insert(link.clone()).await {
                Ok(()) => {
                    info!(
                        code = %link.code,
                        id = %link.id,
                        url = %link.long_url,
                        "created short link"
                    );
                    return Ok(link);
                }
                Err(StorageError::DuplicateCode(code)) => {
                    warn!(code = %code, attempt, "generated short code already taken");
                }
                Err(e) => return Err(storage_to_shortener_error(e)),
            }
        }

        Err(ShortenerError::CodeUnavailable(MAX_CODE_ATTEMPTS))
    }

    async fn redirect(&self, code: &ShortCode) -> Result<ShortLink, ShortenerError> {
        match self
            .repository
            .find_by_code(code)
            .await
            .map_err(storage_to_shortener_error)?
        {
            Some(link) => {
                debug!(code = %code, url = %link.long_url, "resolved short code");
                Ok(link)
            }
            None => {
                debug!(code = %code, "short code not found");
                Err(ShortenerError::NotFound(code.to_string()))
            }
        }
    }

    async fn update(&self, id: &LinkId, long_url: String) -> Result<bool, ShortenerError> {
        let long_url = String::from(Self::validate_url(&long_url)?);

        let matched = self
            .repository
            .update_long_url(id, &long_url)
            .await
            .map_err(storage_to_shortener_error)?;

        if matched {
            info!(id = %id, url = %long_url, "updated short link");
        } else {
            info!(id = %id, "no short link with this id; nothing updated");
        }
        Ok(matched)
    }

    async fn delete(&self, id: &LinkId) -> Result<bool, ShortenerError> {
        let matched = self
            .repository
            .delete(id)
            .await
            .map_err(storage_to_shortener_error)?;

        if matched {
            info!(id = %id, "deleted short link");
        } else {
            info!(id = %id, "no short link with this id; nothing deleted");
        }
        Ok(matched)
    }
}

/// Converts a StorageError to a ShortenerError.
fn storage_to_shortener_error(e: StorageError) -> ShortenerError {
    match e {
        StorageError::DuplicateUrl(url) => ShortenerError::UrlConflict(url),
        other => ShortenerError::Storage(other.to_string()),
    }
}
