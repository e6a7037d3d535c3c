use std::fmt;
use std::sync::Arc;
use swn_core::{ArticleCache, HeadlineSource};
use swn_inference::Curator;

pub struct AppState {
    pub source: Arc<dyn HeadlineSource>,
    pub curator: Arc<Curator>,
    pub cache: Arc<dyn ArticleCache>,
    /// Shared secret expected in `x-api-key`. `None` leaves the endpoint open.
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn HeadlineSource>,
        curator: Arc<Curator>,
        cache: Arc<dyn ArticleCache>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            source,
            curator,
            cache,
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn is_authorized(&self, presented: Option<&str>) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => presented == Some(expected.as_str()),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("source", &self.source.name())
            .field("curator", &self.curator)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
