use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// External identifier of a short link, used for updates and deletions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored mapping from a short code to a long URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    pub id: LinkId,
    pub code: ShortCode,
    /// The original URL that was shortened.
    pub long_url: String,
    pub created_at: Timestamp,
}

impl ShortLink {
    /// Creates a link with a fresh identifier, stamped with the current time.
    pub fn new(code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            id: LinkId::generate(),
            code,
            long_url: long_url.into(),
            created_at: Timestamp::now(),
        }
    }

    /// The public short URL for this link under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        self.code.to_url(base_url)
    }
}
