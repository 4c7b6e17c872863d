use thiserror::Error;

/// Errors talking to the remote judge.
#[derive(Debug, Clone, Error)]
pub enum JudgeError {
    #[error("invalid judge configuration: {0}")]
    Config(String),
    #[error("judge request timed out: {0}")]
    Timeout(String),
    #[error("judge request failed: {0}")]
    Transport(String),
    #[error("judge answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("judge response could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for JudgeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
