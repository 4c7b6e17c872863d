use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "newUrl")]
    pub new_url: String,
    pub db_id: String,
    pub code: String,
}

/// Acknowledges an update or delete.
///
/// `matched` is `false` when no link had the requested id; the request
/// still succeeds.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: &'static str,
    pub error: bool,
    pub matched: bool,
}
