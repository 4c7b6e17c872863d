use crate::error::JudgeError;
use async_trait::async_trait;
use slink_core::{ExecutionResult, SubmissionRequest};

/// A remote code-execution service.
#[async_trait]
pub trait Judge: Send + Sync + 'static {
    /// Queues a submission and returns the token the judge assigned to it.
    async fn submit(&self, request: &SubmissionRequest) -> Result<String, JudgeError>;

    /// Fetches the current state of a queued or finished submission.
    async fn execution(&self, token: &str) -> Result<ExecutionResult, JudgeError>;
}
