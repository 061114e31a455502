use crate::{
    completion::CompletionProviderError, document::DocumentParseError,
    embeddings::EmbeddingProviderError,
};
use thiserror::Error;

/// Input validation failures, raised before any provider call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("No API key provided")]
    MissingCredentials,
    #[error("No document provided")]
    MissingDocument,
    #[error("Question is empty")]
    EmptyQuestion,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Document error")]
    Document(#[from] DocumentParseError),
    #[error("Embedding provider error")]
    Embedding(#[from] EmbeddingProviderError),
    #[error("Completion provider error")]
    Completion(#[from] CompletionProviderError),
    #[error("Invalid input")]
    InvalidInput(#[from] InvalidInputError),
}
