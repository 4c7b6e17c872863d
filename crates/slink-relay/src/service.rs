use crate::error::JudgeError;
use crate::judge::Judge;
use async_trait::async_trait;
use slink_core::{
    ExecutionResult, Relay, RelayError, StorageError, SubmissionRecord, SubmissionRepository,
    SubmissionRequest,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A concrete implementation of the [`Relay`] trait.
///
/// Every operation is a single linear sequence: validate, call the judge or
/// the repository, return. Nothing is retried.
#[derive(Debug, Clone)]
pub struct RelayService<R, J> {
    repository: Arc<R>,
    judge: Arc<J>,
}

impl<R: SubmissionRepository, J: Judge> RelayService<R, J> {
    pub fn new(repository: R, judge: J) -> Self {
        Self {
            repository: Arc::new(repository),
            judge: Arc::new(judge),
        }
    }

    async fn stored(&self, token: &str) -> Result<SubmissionRecord, RelayError> {
        self.repository
            .get(token)
            .await
            .map_err(storage_to_relay_error)?
            .ok_or_else(|| RelayError::NotFound(token.to_string()))
    }
}

#[async_trait]
impl<R: SubmissionRepository, J: Judge> Relay for RelayService<R, J> {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionRecord, RelayError> {
        if request.language_id.trim().is_empty() {
            return Err(RelayError::InvalidRequest(
                "language_id cannot be empty".to_string(),
            ));
        }

        let token = self
            .judge
            .submit(&request)
            .await
            .map_err(judge_to_relay_error)?;

        let record = SubmissionRecord::new(token, request);
        self.repository
            .insert(record.clone())
            .await
            .map_err(|e| {
                // The judge already queued the job; only our copy is lost.
                error!(token = %record.token, error = %e, "failed to store submission");
                storage_to_relay_error(e)
            })?;

        info!(token = %record.token, language_id = %record.language_id, "relayed submission");
        Ok(record)
    }

    async fn fetch(&self, token: &str) -> Result<SubmissionRecord, RelayError> {
        let record = self.stored(token).await?;
        debug!(token = %token, "fetched stored submission");
        Ok(record)
    }

    async fn execution(&self, token: &str) -> Result<ExecutionResult, RelayError> {
        self.stored(token).await?;

        self.judge
            .execution(token)
            .await
            .map_err(judge_to_relay_error)
    }
}

fn judge_to_relay_error(e: JudgeError) -> RelayError {
    warn!(error = %e, "judge call failed");
    RelayError::Remote(e.to_string())
}

fn storage_to_relay_error(e: StorageError) -> RelayError {
    RelayError::Storage(e.to_string())
}
