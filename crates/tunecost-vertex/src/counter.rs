//! Token counter trait

use async_trait::async_trait;

use crate::error::Result;

/// Capability boundary around a provider's token-counting endpoint.
#[async_trait]
pub trait TokenCounter: Send + Sync {
    /// Count tokens for an ordered list of texts in one call, against
    /// the given model.
    async fn count_tokens(&self, model: &str, texts: &[String]) -> Result<u64>;
}
