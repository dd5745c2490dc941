use std::future::Future;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::GroqConfig;

use super::inference::{build_request, parse_response};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion service unavailable: {0}")]
    Unavailable(&'static str),
    #[error("{0}")]
    Status(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("completion response did not contain any content")]
    EmptyResponse,
}

/// Text completion collaborator; returns the final message content only.
pub trait CompletionService {
    fn complete(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}

#[derive(Clone)]
pub struct GroqClient {
    http: Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(http: Client, config: GroqConfig) -> Self {
        Self { http, config }
    }
}

impl CompletionService for GroqClient {
    async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(CompletionError::Unavailable("GROQ_API_KEY is not configured"))?;

        let request = build_request(self.config.model.clone(), prompt, temperature, max_tokens);
        let response = self
            .http
            .post(self.config.api_url.clone())
            .bearer_auth(api_key)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(target: "ai", %status, model = %self.config.model, "completion request rejected");
            return Err(CompletionError::Status(status));
        }

        parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn missing_key_is_reported_as_unavailable() {
        let client = GroqClient::new(
            Client::new(),
            GroqConfig {
                api_key: None,
                model: "llama-3.1-8b-instant".into(),
                api_url: "http://127.0.0.1:9/v1/chat/completions".parse().unwrap(),
                timeout: Duration::from_secs(1),
            },
        );
        let err = client.complete("oi", 0.0, 10).await.unwrap_err();
        assert!(matches!(err, CompletionError::Unavailable(_)));
    }

    #[test]
    fn status_error_displays_the_code() {
        let err = CompletionError::Status(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "429 Too Many Requests");
    }
}
