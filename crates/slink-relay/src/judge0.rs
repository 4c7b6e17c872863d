use crate::error::JudgeError;
use crate::judge::Judge;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use slink_core::{ExecutionResult, SubmissionRequest};
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://judge0-ce.p.rapidapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Connection settings for a Judge0-compatible API.
#[derive(Debug, Clone, TypedBuilder)]
pub struct Judge0Settings {
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    base_url: String,
    /// RapidAPI key. When absent no authentication headers are sent,
    /// which suits self-hosted judges.
    #[builder(default)]
    api_key: Option<String>,
    /// Value of the host header; defaults to the host of `base_url`.
    #[builder(default)]
    api_host: Option<String>,
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

/// HTTP client for a Judge0-compatible API.
///
/// Source code, stdin and outputs travel base64-encoded; the client passes
/// them through untouched.
#[derive(Debug, Clone)]
pub struct Judge0Client {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct SubmitBody<'a> {
    language_id: &'a str,
    source_code: &'a str,
    stdin: &'a str,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

impl Judge0Client {
    pub fn new(settings: Judge0Settings) -> Result<Self, JudgeError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|e| JudgeError::Config(format!("base url '{}': {e}", settings.base_url)))?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = settings.api_key.as_deref() {
            let mut key = HeaderValue::from_str(api_key)
                .map_err(|e| JudgeError::Config(format!("api key: {e}")))?;
            key.set_sensitive(true);
            headers.insert(API_KEY_HEADER, key);

            let host = settings
                .api_host
                .as_deref()
                .or(base.host_str())
                .ok_or_else(|| JudgeError::Config("base url has no host".to_string()))?;
            let host = HeaderValue::from_str(host)
                .map_err(|e| JudgeError::Config(format!("api host: {e}")))?;
            headers.insert(API_HOST_HEADER, host);
        }

        let http = Client::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| JudgeError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, JudgeError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(JudgeError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| JudgeError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Judge for Judge0Client {
    async fn submit(&self, request: &SubmissionRequest) -> Result<String, JudgeError> {
        let url = format!("{}/submissions?base64_encoded=true", self.base_url);
        trace!(url = %url, language_id = %request.language_id, "submitting to judge");

        let response = self
            .http
            .post(&url)
            .json(&SubmitBody {
                language_id: &request.language_id,
                source_code: &request.source_code,
                stdin: &request.stdin,
            })
            .send()
            .await?;

        let TokenBody { token } = Self::decode(response).await?;
        if token.is_empty() {
            return Err(JudgeError::Decode("judge returned an empty token".to_string()));
        }

        debug!(token = %token, "judge accepted submission");
        Ok(token)
    }

    async fn execution(&self, token: &str) -> Result<ExecutionResult, JudgeError> {
        let url = format!(
            "{}/submissions/{}?base64_encoded=true&fields=*",
            self.base_url, token
        );
        trace!(url = %url, "fetching execution result");

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }
}
