//! # docquery
//!
//! Retrieval-augmented question answering over PDF documents.
//!
//! docquery answers natural-language questions about a PDF by retrieving the
//! most relevant passages with semantic similarity search and handing them to
//! a generative model together with a grounded instruction prompt.
//!
//! ## Pipeline
//!
//! - **Extraction**: the PDF byte stream becomes one normalized text string
//!   per page ([`document`])
//! - **Chunking**: each page is split into fixed-size word windows tagged
//!   with their page number ([`chunk`])
//! - **Indexing**: chunks are embedded in batches and held in an in-memory
//!   index that ranks them by cosine similarity ([`embeddings`])
//! - **Answering**: the top-ranked chunks and the question are assembled into
//!   a grounded prompt ([`prompt`]) and sent to a completion provider
//!   ([`completion`])
//!
//! The [`engine::QueryEngine`] ties the stages together, rebuilding the index
//! only when the submitted document changes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docquery::engine::QueryEngine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("OPENAI_API_KEY")?;
//!     let mut engine = QueryEngine::openai(api_key)?;
//!
//!     let document = std::fs::read("manual.pdf")?;
//!     let answer = engine
//!         .run_query("manual.pdf", &document, "How do I reset the device?")
//!         .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! Both provider seams are traits ([`embeddings::model::EmbeddingModel`] and
//! [`completion::CompletionModel`]), so the pipeline runs against any
//! provider, or against deterministic stubs in tests, without touching the
//! orchestration code.

/// Word-window chunking of extracted page text
pub mod chunk;

/// Generative-model completion support
pub mod completion;

/// PDF text extraction and normalization
pub mod document;

/// Text embeddings and the in-memory retrieval index
pub mod embeddings;

/// The query orchestrator tying the pipeline together
pub mod engine;

/// Error types for all library operations
pub mod error;

/// Grounded prompt assembly
pub mod prompt;

/// Builtin completion and embedding model providers
pub mod providers;
