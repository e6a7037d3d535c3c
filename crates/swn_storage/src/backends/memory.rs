use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use swn_core::{ArticleCache, CuratedArticle};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use crate::CacheConfig;

struct CacheEntry {
    articles: Vec<CuratedArticle>,
    stored_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        !ttl.is_zero() && now.duration_since(self.stored_at) >= ttl
    }
}

/// Process-local cache. Entries expire `ttl` after they were written and are
/// dropped lazily on read or by the sweeper task.
#[derive(Clone)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: config.ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries currently held, expired ones included until swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl, now));
        before - entries.len()
    }

    /// Runs `purge_expired` every `period` until the handle is aborted.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let removed = cache.purge_expired().await;
                if removed > 0 {
                    tracing::debug!("Swept {} expired cache entries", removed);
                }
            }
        })
    }
}

#[async_trait]
impl ArticleCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<CuratedArticle>> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(self.ttl, now) => return Some(entry.articles.clone()),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired(self.ttl, now)) {
            entries.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, articles: Vec<CuratedArticle>) {
        let entry = CacheEntry {
            articles,
            stored_at: Instant::now(),
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }
}
