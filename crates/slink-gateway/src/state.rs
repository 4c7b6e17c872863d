use std::sync::Arc;

use slink_core::{Relay, Shortener};

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    relay: Arc<dyn Relay>,
    base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        relay: Arc<dyn Relay>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            relay,
            base_url: public_base_url.into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn relay(&self) -> &dyn Relay {
        self.relay.as_ref()
    }

    /// Public base URL that short codes are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
