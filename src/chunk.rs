use std::fmt;

/// Default word window applied when splitting pages into chunks.
pub const DEFAULT_CHUNK_WORDS: usize = 200;

/// A bounded excerpt of document text, tagged with the page it came from.
///
/// Chunks are the retrieval unit: they get embedded, ranked against the
/// question and quoted back to the model. The rendered form carries the page
/// tag so answers can cite pages directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-indexed source page.
    pub page: usize,
    /// Up to the configured window of words, single-space separated.
    pub text: String,
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Page Number {}] \"{}\"", self.page, self.text)
    }
}

/// Splits normalized page texts into consecutive windows of up to
/// `window_words` words each. Pages are numbered from 1, a page with no words
/// yields no chunks, and every word of every page lands in exactly one chunk.
///
/// # Panics
/// Panics if `window_words` is zero.
#[must_use]
pub fn chunk_pages(pages: &[String], window_words: usize) -> Vec<Chunk> {
    assert!(window_words > 0, "chunk window must be greater than zero");
    let mut chunks = Vec::new();
    for (idx, page) in pages.iter().enumerate() {
        let words: Vec<&str> = page.split_whitespace().collect();
        for group in words.chunks(window_words) {
            chunks.push(Chunk {
                page: idx + 1,
                text: group.join(" "),
            });
        }
    }
    chunks
}
