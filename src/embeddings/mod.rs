pub mod model;

use crate::chunk::Chunk;
use model::EmbeddingModel;
use thiserror::Error;
use tracing::{debug, info};

/// Default number of inputs sent per embedding request.
pub const DEFAULT_EMBED_BATCH: usize = 1000;

#[derive(Debug, Clone, Error)]
pub enum EmbeddingProviderError {
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("RequestError: {0}")]
    RequestError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
}

/// Chunks of a single document paired with their embedding vectors.
///
/// Built wholesale by [`EmbeddingIndex::load`] and replaced, never patched.
/// `load` is a constructor, so a failed load produces no index and the
/// caller's previous one, if any, stays untouched.
#[derive(Debug)]
pub struct EmbeddingIndex {
    document_id: String,
    chunks: Vec<Chunk>,
    embeddings: Vec<Vec<f64>>,
}

impl EmbeddingIndex {
    /// Embeds `chunks` in order, `batch_size` inputs per provider call, and
    /// returns the loaded index. Any failing batch aborts the whole load;
    /// there is no partial success and no internal retry.
    ///
    /// # Panics
    /// Panics if `batch_size` is zero.
    pub async fn load<M: EmbeddingModel>(
        document_id: impl Into<String>,
        chunks: Vec<Chunk>,
        model: &M,
        batch_size: usize,
    ) -> Result<Self, EmbeddingProviderError> {
        assert!(batch_size > 0, "embed batch size must be greater than zero");
        let rendered: Vec<String> = chunks.iter().map(Chunk::to_string).collect();
        let mut embeddings = Vec::with_capacity(chunks.len());
        for batch in rendered.chunks(batch_size) {
            debug!(batch_len = batch.len(), "embedding chunk batch");
            let mut vectors = model.embed(batch).await?;
            embeddings.append(&mut vectors);
        }
        if embeddings.len() != chunks.len() {
            return Err(EmbeddingProviderError::ParseError(format!(
                "expected {} embeddings, got {}",
                chunks.len(),
                embeddings.len()
            )));
        }
        let index = Self {
            document_id: document_id.into(),
            chunks,
            embeddings,
        };
        info!(
            document_id = %index.document_id,
            chunks = index.chunks.len(),
            "embedding index loaded"
        );
        Ok(index)
    }

    /// Identifier of the loaded document.
    #[must_use]
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Embeds `text` in one provider call and returns the
    /// `min(top_k, len)` most related chunks, most related first.
    ///
    /// Relatedness is cosine similarity between the query vector and each
    /// stored vector; the sort is stable, so equal scores keep chunk order.
    /// Scores are dropped from the result.
    pub async fn query<M: EmbeddingModel>(
        &self,
        model: &M,
        text: &str,
        top_k: usize,
    ) -> Result<Vec<Chunk>, EmbeddingProviderError> {
        let query = [text.to_string()];
        let mut vectors = model.embed(&query).await?;
        if vectors.len() != 1 {
            return Err(EmbeddingProviderError::ParseError(format!(
                "expected 1 query embedding, got {}",
                vectors.len()
            )));
        }
        let query_vector = vectors.remove(0);

        let mut ranked: Vec<(f64, &Chunk)> = self
            .embeddings
            .iter()
            .zip(&self.chunks)
            .map(|(embedding, chunk)| (cosine_similarity(&query_vector, embedding), chunk))
            .collect();
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(top_k.min(self.chunks.len()))
            .map(|(_, chunk)| chunk.clone())
            .collect())
    }
}

/// Cosine similarity between two vectors, in [-1, 1]. Mismatched lengths and
/// zero-magnitude vectors score 0.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
