mod api_client;
pub mod prompt;

pub use api_client::OpenRouterClient;
pub use prompt::QueryRequest;

use async_trait::async_trait;
use thiserror::Error;

/// Recoverable failures of a Mentor AI call. None of them end the session.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no API key configured (set OPENROUTER_API_KEY)")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            QueryError::MalformedResponse(err.to_string())
        } else {
            QueryError::Transport(err.to_string())
        }
    }
}

#[async_trait]
pub trait MentorClient {
    /// One chat-completion round trip. Does not touch any cache.
    async fn fetch(&self, request: &QueryRequest) -> Result<String, QueryError>;
}
