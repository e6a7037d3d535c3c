use async_trait::async_trait;
use crate::types::CuratedArticle;

/// Time-bounded store of curated article lists keyed by request fingerprint.
#[async_trait]
pub trait ArticleCache: Send + Sync {
    /// Returns the stored list unless it is missing or expired.
    async fn get(&self, key: &str) -> Option<Vec<CuratedArticle>>;

    /// Replaces whatever is stored under `key`.
    async fn set(&self, key: &str, articles: Vec<CuratedArticle>);
}
