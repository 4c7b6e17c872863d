//! Repository implementations for short links and relayed submissions.
//!
//! Two backends are provided: an in-process store built on `DashMap`, and a
//! MySQL store built on `sqlx`. Both enforce the uniqueness rules of the
//! repository contracts atomically with the write.

pub mod memory;
pub mod mysql;

pub use memory::{InMemoryLinkRepository, InMemorySubmissionRepository};
pub use mysql::{MySqlLinkRepository, MySqlSubmissionRepository};
pub use slink_core::repository::{LinkRepository, Result, SubmissionRepository};
pub use slink_core::StorageError;
