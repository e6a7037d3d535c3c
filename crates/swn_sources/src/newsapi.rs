use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use swn_core::{Error, HeadlineSource, RawArticle, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Option<Vec<RawArticle>>,
}

/// Top-headlines reader for NewsAPI.org.
pub struct NewsApiSource {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl NewsApiSource {
    pub fn new(api_key: Option<String>, base_url: Url) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.unwrap_or_default(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/top-headlines", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl HeadlineSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch(&self, query: &str, page_size: u32) -> Result<Vec<RawArticle>> {
        let mut params = vec![
            ("pageSize", page_size.to_string()),
            ("language", LANGUAGE.to_string()),
        ];
        if !query.is_empty() {
            params.push(("q", query.to_string()));
        }

        tracing::debug!("Fetching top headlines (q={:?}, pageSize={})", query, page_size);
        let response = self.client
            .get(self.endpoint())
            .header("X-Api-Key", &self.api_key)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let envelope = response.json::<Envelope>().await?;
        if envelope.status.as_deref() == Some("error") {
            return Err(Error::Upstream(
                envelope.message.unwrap_or_else(|| "provider reported an error".to_string()),
            ));
        }

        let articles = envelope.articles.unwrap_or_default();
        tracing::debug!("Provider returned {} articles", articles.len());
        Ok(articles)
    }
}
