use crate::submission::{ExecutionResult, SubmissionRecord, SubmissionRequest};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::RelayError>;

/// The submission relay.
#[async_trait]
pub trait Relay: Send + Sync + 'static {
    /// Forwards a submission to the remote judge and stores it under the returned token.
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionRecord>;

    /// Returns the stored submission for a token.
    async fn fetch(&self, token: &str) -> Result<SubmissionRecord>;

    /// Asks the remote judge for the current execution result of a stored submission.
    async fn execution(&self, token: &str) -> Result<ExecutionResult>;
}
