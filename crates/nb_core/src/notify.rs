use async_trait::async_trait;

use crate::types::DigestLine;
use crate::Result;

/// Delivers a finished digest to a recipient.
#[async_trait]
pub trait DigestNotifier: Send + Sync {
    /// Send the digest as a 1-indexed numbered list, one line per summary
    async fn notify(&self, subject: &str, lines: &[DigestLine], recipient: &str) -> Result<()>;
}
