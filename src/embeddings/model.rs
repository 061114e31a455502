use crate::embeddings::EmbeddingProviderError;
use async_trait::async_trait;

/// Capability contract for embedding providers.
///
/// One fixed-dimension vector per input string, order preserved. Callers keep
/// the number of inputs per call within the provider's batch limit; the index
/// takes care of that when loading.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f64>>, EmbeddingProviderError>;
}
