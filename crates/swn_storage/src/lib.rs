use std::time::Duration;

pub mod backends;

pub use backends::*;

pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Lifetime of every entry. Zero means entries never expire.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

impl CacheConfig {
    pub fn from_secs(secs: u64) -> Self {
        Self { ttl: Duration::from_secs(secs) }
    }
}

pub mod prelude {
    pub use super::CacheConfig;
    pub use super::backends::*;
}
