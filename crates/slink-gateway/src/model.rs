mod health;
mod submission;
mod url;

pub use health::HealthResponse;
pub use submission::{
    CreateSubmissionRequest, CreateSubmissionResponse, DataResponse, SubmissionData, TokenQuery,
};
pub use url::{AckResponse, ShortenRequest, ShortenResponse};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}
