use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CompletionProviderError {
    #[error("Provider error -> HTTP Status {0}: {1}")]
    ProviderError(u16, String),
    #[error("RequestError: {0}")]
    RequestError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
}

/// Capability contract for generative-model providers.
///
/// One request per call with the prompt as the sole user message; the model's
/// text comes back verbatim, with no post-processing. Provider failures of
/// any flavor (auth, rate limit, malformed request, network) collapse to
/// [`CompletionProviderError`] at this boundary.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionProviderError>;
}
