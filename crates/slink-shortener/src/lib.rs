//! The link registry.
//!
//! [`ShortenerService`] implements [`slink_core::Shortener`] on top of any
//! [`slink_core::LinkRepository`] and code [`slink_generator::Generator`].

pub mod service;

pub use service::ShortenerService;
pub use slink_core::ShortenerError;
