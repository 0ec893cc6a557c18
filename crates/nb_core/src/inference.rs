use async_trait::async_trait;

use crate::Result;

/// An abstractive summarization backend.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Returns the name of the model backend
    fn name(&self) -> &str;

    /// Summarize non-empty text, bounded to roughly [min_len, max_len] tokens.
    /// Callers filter out empty input before calling.
    async fn summarize(&self, text: &str, max_len: usize, min_len: usize) -> Result<String>;
}
