use crate::completion::{CompletionModel, CompletionProviderError};
use crate::error::InvalidInputError;
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, instrument};

const URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMP: f64 = 1.0;
const DEFAULT_TOKENS: usize = 2400;

pub struct OpenAICompletionModel {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
    model: String,
    temperature: f64,
    max_tokens: usize,
}

impl OpenAICompletionModel {
    /// Creates a provider against the default OpenAI endpoint and chat model.
    /// Blank credentials are rejected before any request goes out.
    pub fn new(api_key: impl Into<String>) -> Result<Self, InvalidInputError> {
        Self::with_endpoint(api_key, URL, DEFAULT_MODEL)
    }

    pub fn with_endpoint(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, InvalidInputError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(InvalidInputError::MissingCredentials);
        }
        Ok(Self {
            api_key,
            api_url: api_url.into(),
            client: reqwest::Client::new(),
            model: model.into(),
            temperature: DEFAULT_TEMP,
            max_tokens: DEFAULT_TOKENS,
        })
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl CompletionModel for OpenAICompletionModel {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionProviderError> {
        let request_body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        debug!("Sending completion request to OpenAI");

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Request failed");
                CompletionProviderError::RequestError(e.to_string())
            })?;

        let status = response.status();
        debug!(%status, "Received API response");

        if status.is_success() {
            let response_json: serde_json::Value = response.json().await.map_err(|e| {
                error!(error = ?e, "Failed to parse response JSON");
                CompletionProviderError::ParseError(e.to_string())
            })?;

            let content = response_json["choices"][0]["message"]["content"]
                .as_str()
                .ok_or(CompletionProviderError::ParseError(
                    "Invalid response body".to_string(),
                ))?;

            Ok(content.to_string())
        } else {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error (failed to read response body)".to_string());

            error!(
                status = %status,
                error = %error_msg,
                "API returned error response"
            );

            Err(CompletionProviderError::ProviderError(
                status.into(),
                error_msg,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_rejected() {
        assert!(matches!(
            OpenAICompletionModel::new(""),
            Err(InvalidInputError::MissingCredentials)
        ));
    }

    #[tokio::test]
    #[ignore]
    async fn simple_openai_completion_request() {
        tracing_subscriber::fmt().init();
        let api_key = std::env::var("DOCQUERY_OPENAI_API_KEY").unwrap();

        let model = OpenAICompletionModel::new(api_key)
            .unwrap()
            .with_temperature(0.0)
            .with_max_tokens(10);

        let response = model
            .complete(
                r#"
This is a test from a software library that uses this LLM assistant.
For this test to be considered successful, reply with "okay" without the quotes, and NOTHING else.
"#,
            )
            .await;

        assert!(response.is_ok_and(|v| v == "okay"));
    }
}
