//! Core types and traits for the slink service.
//!
//! This crate provides the shared domain types, repository contracts and
//! service traits used by the link registry, the submission relay and the
//! HTTP gateway.

pub mod error;
pub mod link;
pub mod relay;
pub mod repository;
pub mod shortcode;
pub mod shortener;
pub mod submission;

pub use error::{CoreError, RelayError, ShortenerError, StorageError};
pub use link::{LinkId, ShortLink};
pub use relay::Relay;
pub use repository::{LinkRepository, SubmissionRepository};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
pub use submission::{ExecutionResult, ExecutionStatus, SubmissionRecord, SubmissionRequest};
