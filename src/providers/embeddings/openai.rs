use crate::embeddings::{model::EmbeddingModel, EmbeddingProviderError};
use crate::error::InvalidInputError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, instrument};

const URL: &str = "https://api.openai.com/v1/embeddings";
const DEFAULT_MODEL: &str = "text-embedding-3-small";

pub struct OpenAIEmbeddingModel {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
    model: String,
}

impl OpenAIEmbeddingModel {
    /// Creates a provider against the default OpenAI endpoint and embedding
    /// model. Blank credentials are rejected before any request goes out.
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
        })
    }
}

#[derive(Deserialize)]
struct OpenAIEmbeddingResponse {
    pub data: Vec<OpenAIEmbeddingData>,
}

#[derive(Deserialize)]
struct OpenAIEmbeddingData {
    pub embedding: Vec<f64>,
}

#[async_trait]
impl EmbeddingModel for OpenAIEmbeddingModel {
    #[instrument(skip(self, inputs), fields(input_count = inputs.len()))]
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f64>>, EmbeddingProviderError> {
        let request_body = json!({
            "input": inputs,
            "model": self.model,
        });
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmbeddingProviderError::RequestError(e.to_string()))?;

        let status = response.status();
        debug!(%status, "Received embedding response");

        if status.is_success() {
            let response = response
                .json::<OpenAIEmbeddingResponse>()
                .await
                .map_err(|e| EmbeddingProviderError::ParseError(e.to_string()))?;

            if response.data.len() != inputs.len() {
                return Err(EmbeddingProviderError::ParseError(format!(
                    "expected {} embeddings, got {}",
                    inputs.len(),
                    response.data.len()
                )));
            }

            Ok(response.data.into_iter().map(|d| d.embedding).collect())
        } else {
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!(%status, error = %error_message, "Embedding API returned error response");
            Err(EmbeddingProviderError::ProviderError(error_message))
        }
    }
}
