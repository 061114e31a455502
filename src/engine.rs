use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::chunk::{self, DEFAULT_CHUNK_WORDS};
use crate::completion::CompletionModel;
use crate::document;
use crate::embeddings::{model::EmbeddingModel, EmbeddingIndex, DEFAULT_EMBED_BATCH};
use crate::error::{Error, InvalidInputError};
use crate::prompt;
use crate::providers::{completions::OpenAI, embeddings::OpenAIEmbedding};

const DEFAULT_TOP_K: usize = 10;

/// Tuning knobs for the retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Word window per chunk.
    pub chunk_words: usize,
    /// Inputs per embedding request during an index load.
    pub embed_batch_size: usize,
    /// Number of chunks retrieved per question.
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_words: DEFAULT_CHUNK_WORDS,
            embed_batch_size: DEFAULT_EMBED_BATCH,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Answers questions about one PDF document at a time.
///
/// The engine owns the embedding index for the most recently submitted
/// document and rebuilds it only when the submitted document identifier
/// changes, so successive questions against the same document reuse the
/// loaded index. Identifiers are opaque to the engine; callers that cannot
/// guarantee stable naming can pass a content-derived identifier instead.
///
/// [`run_query`](QueryEngine::run_query) takes `&mut self`: one engine
/// serves one document stream, and parallel documents get one engine each.
pub struct QueryEngine<E: EmbeddingModel, C: CompletionModel> {
    embedding_model: E,
    completion_model: C,
    config: EngineConfig,
    index: Option<EmbeddingIndex>,
}

impl QueryEngine<OpenAIEmbedding, OpenAI> {
    /// Wires the engine to OpenAI for both embeddings and completions.
    pub fn openai(api_key: impl AsRef<str>) -> Result<Self, InvalidInputError> {
        let api_key = api_key.as_ref();
        Ok(Self::new(
            OpenAIEmbedding::new(api_key)?,
            OpenAI::new(api_key)?,
        ))
    }
}

impl<E: EmbeddingModel, C: CompletionModel> QueryEngine<E, C> {
    #[must_use]
    pub fn new(embedding_model: E, completion_model: C) -> Self {
        Self {
            embedding_model,
            completion_model,
            config: EngineConfig::default(),
            index: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Answers `question` from the content of the given document.
    ///
    /// The index is (re)built when `document_id` differs from the loaded
    /// one, an O(document size) cost paid once per distinct document per
    /// engine lifetime. Answers are never cached: every call re-embeds the
    /// question and re-queries the generative model.
    ///
    /// Fails fast with [`InvalidInputError`] on an empty document or blank
    /// question, before any provider call. A failed rebuild leaves any
    /// previously loaded index in place.
    #[instrument(skip_all, fields(document_id = %document_id))]
    pub async fn run_query(
        &mut self,
        document_id: &str,
        document_bytes: &[u8],
        question: &str,
    ) -> Result<String, Error> {
        if document_bytes.is_empty() {
            return Err(InvalidInputError::MissingDocument.into());
        }
        if question.trim().is_empty() {
            return Err(InvalidInputError::EmptyQuestion.into());
        }

        let index = match &mut self.index {
            Some(index) if index.document_id() == document_id => {
                debug!("reusing loaded index");
                &*index
            }
            stale => {
                let pages = document::extract_pages(document_bytes)?;
                let chunks = chunk::chunk_pages(&pages, self.config.chunk_words);
                info!(
                    pages = pages.len(),
                    chunks = chunks.len(),
                    "building embedding index"
                );
                let built = EmbeddingIndex::load(
                    document_id,
                    chunks,
                    &self.embedding_model,
                    self.config.embed_batch_size,
                )
                .await?;
                &*stale.insert(built)
            }
        };

        let top = index
            .query(&self.embedding_model, question, self.config.top_k)
            .await?;
        let prompt = prompt::build_prompt(question, &top);
        let answer = self.completion_model.complete(&prompt).await?;
        Ok(answer)
    }
}
