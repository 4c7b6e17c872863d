use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A code-execution request as forwarded to the remote judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub language_id: String,
    pub source_code: String,
    pub stdin: String,
}

/// A submission accepted by the remote judge, keyed by the token it returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub token: String,
    pub language_id: String,
    pub source_code: String,
    pub stdin: String,
    pub created_at: Timestamp,
}

impl SubmissionRecord {
    pub fn new(token: impl Into<String>, request: SubmissionRequest) -> Self {
        Self {
            token: token.into(),
            language_id: request.language_id,
            source_code: request.source_code,
            stdin: request.stdin,
            created_at: Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub id: u32,
    pub description: String,
}

/// The remote judge's view of a submission.
///
/// Output fields are passed through exactly as the judge encodes them
/// (base64 when the relay requests base64 encoding).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub status: Option<ExecutionStatus>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Wall time in seconds, as a decimal string.
    #[serde(default)]
    pub time: Option<String>,
    /// Peak memory in kilobytes.
    #[serde(default)]
    pub memory: Option<u64>,
}
