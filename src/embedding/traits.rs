//! Embedder trait — the swap-ready abstraction for C6's sentence encoder.
//!
//! The shipped implementation runs a local ONNX sentence-transformer, but
//! the interface is identical to what a remote encoding service would need:
//! just `encode(text) -> Result<Vec<f64>>`. Swapping providers needs no
//! other code changes.

use anyhow::Result;
use async_trait::async_trait;

/// Encodes text into a dense vector. Implementations need not normalize —
/// [`super::fallback::classify`] re-normalizes the query embedding itself.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn encode(&self, text: &str) -> Result<Vec<f64>>;

    /// Encode multiple texts, in order. Default calls `encode` sequentially;
    /// implementations may override for true batching.
    async fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.encode(text).await?);
        }
        Ok(results)
    }
}
