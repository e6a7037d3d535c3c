use std::sync::Arc;
use swn_core::InferenceModel;
use url::Url;
use crate::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub mod openai;
pub mod unavailable;

pub use openai::OpenAiModel;
pub use unavailable::UnavailableModel;

/// Picks the model implementation for the given configuration.
///
/// Without an API key every call would be rejected upstream anyway, so the
/// network is skipped and curation always takes the fallback path.
pub fn create_model(config: Config) -> Arc<dyn InferenceModel> {
    match config.api_key.filter(|key| !key.is_empty()) {
        Some(api_key) => {
            let base_url = config.base_url.unwrap_or_else(default_base_url);
            let model_name = config.model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string());
            Arc::new(OpenAiModel::new(api_key, model_name, base_url))
        }
        None => {
            tracing::warn!("No generative-text API key configured, summaries will use article descriptions");
            Arc::new(UnavailableModel)
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
