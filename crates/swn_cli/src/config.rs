use clap::Parser;
use std::net::SocketAddr;
use swn_storage::CacheConfig;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about = "AI-curated news headlines over HTTP", long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Credential for the headline provider
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub newsapi_key: Option<String>,

    /// Headline provider base URL
    #[arg(long, env = "NEWSAPI_URL", default_value = swn_sources::newsapi::DEFAULT_BASE_URL)]
    pub newsapi_url: Url,

    /// Credential for the generative-text provider; without it summaries fall back to descriptions
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Generative-text provider base URL
    #[arg(long, env = "OPENAI_URL", default_value = swn_inference::DEFAULT_BASE_URL)]
    pub openai_url: Url,

    #[arg(long, env = "OPENAI_MODEL", default_value = swn_inference::DEFAULT_MODEL)]
    pub openai_model: String,

    /// Shared secret required in the x-api-key header; empty disables the check
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Cache entry lifetime in seconds (0 keeps entries forever)
    #[arg(long, env = "CACHE_TTL", default_value_t = 60)]
    pub cache_ttl: u64,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::from_secs(self.cache_ttl)
    }

    pub fn inference_config(&self) -> swn_inference::Config {
        swn_inference::Config {
            api_key: non_empty(&self.openai_api_key),
            model_name: Some(self.openai_model.clone()),
            base_url: Some(self.openai_url.clone()),
        }
    }

    pub fn newsapi_key(&self) -> Option<String> {
        non_empty(&self.newsapi_key)
    }

    pub fn api_key(&self) -> Option<String> {
        non_empty(&self.api_key)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
