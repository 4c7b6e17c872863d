use serde::{Deserialize, Serialize};
use slink_core::{SubmissionRecord, SubmissionRequest};

/// Judge language ids are numeric, but clients send them both ways.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LanguageId {
    Text(String),
    Number(u64),
}

impl From<LanguageId> for String {
    fn from(value: LanguageId) -> Self {
        match value {
            LanguageId::Text(text) => text,
            LanguageId::Number(number) => number.to_string(),
        }
    }
}

fn language_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    LanguageId::deserialize(deserializer).map(String::from)
}

#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    #[serde(deserialize_with = "language_id")]
    pub language_id: String,
    pub source_code: String,
    #[serde(rename = "std_in", default)]
    pub stdin: String,
}

impl From<CreateSubmissionRequest> for SubmissionRequest {
    fn from(value: CreateSubmissionRequest) -> Self {
        SubmissionRequest {
            language_id: value.language_id,
            source_code: value.source_code,
            stdin: value.stdin,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateSubmissionResponse {
    pub token: String,
    pub language_id: String,
    pub source_code: String,
    pub stdin: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubmissionData {
    pub token: String,
    pub language_id: String,
    pub source_code: String,
    pub stdin: String,
    pub created_at: String,
}

impl From<SubmissionRecord> for SubmissionData {
    fn from(record: SubmissionRecord) -> Self {
        Self {
            token: record.token,
            language_id: record.language_id,
            source_code: record.source_code,
            stdin: record.stdin,
            created_at: record.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub error: bool,
    pub message: &'static str,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: String,
}
