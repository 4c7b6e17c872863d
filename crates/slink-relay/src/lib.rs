//! The submission relay.
//!
//! Code submissions are forwarded to a remote judge (any Judge0-compatible
//! API) through the [`Judge`] trait. [`RelayService`] stores each accepted
//! submission under the token the judge returned, so it can be looked up
//! later without another remote call.

pub mod error;
pub mod judge;
pub mod judge0;
pub mod service;

pub use error::JudgeError;
pub use judge::Judge;
pub use judge0::{Judge0Client, Judge0Settings};
pub use service::RelayService;
pub use slink_core::RelayError;
