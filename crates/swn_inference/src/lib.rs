use url::Url;

pub mod curation;
pub mod models;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<Url>,
}

pub mod prelude {
    pub use super::Config;
    pub use super::curation::Curator;
    pub use super::models::create_model;
    pub use swn_core::{CuratedArticle, RawArticle, Result, Error};
}

pub use curation::Curator;
pub use models::create_model;
