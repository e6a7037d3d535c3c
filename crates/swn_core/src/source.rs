use async_trait::async_trait;
use crate::types::RawArticle;
use crate::Result;

#[async_trait]
pub trait HeadlineSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetches one page of headlines. An empty query asks for general top headlines.
    async fn fetch(&self, query: &str, page_size: u32) -> Result<Vec<RawArticle>>;
}
