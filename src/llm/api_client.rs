use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::prompt::{Message, QueryRequest};
use super::{MentorClient, QueryError};
use crate::config::Config;

/// OpenAI-compatible chat-completion client pointed at OpenRouter by default.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
    model: String,
    referer: String,
    title: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(OpenRouterClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl MentorClient for OpenRouterClient {
    async fn fetch(&self, request: &QueryRequest) -> Result<String, QueryError> {
        let api_key = self.api_key.as_deref().ok_or(QueryError::MissingCredential)?;

        let body = ChatRequest {
            model: &self.model,
            messages: request.messages(),
        };

        log::debug!("Mentor AI request for '{}' to {}", request.material, self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Mentor AI returned {} for '{}'", status, request.material);
            return Err(QueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<ChatResponse>().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::MalformedResponse("response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| QueryError::MalformedResponse("first choice has no content".to_string()))
    }
}
