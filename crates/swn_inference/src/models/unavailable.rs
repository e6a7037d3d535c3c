use async_trait::async_trait;
use swn_core::{Error, InferenceModel, Prompt, Result};

/// Stand-in used when no generative-text credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

#[async_trait]
impl InferenceModel for UnavailableModel {
    fn name(&self) -> &str {
        "Unavailable"
    }

    async fn generate(&self, _prompt: &Prompt) -> Result<String> {
        Err(Error::Inference("generative-text API key is not configured".to_string()))
    }
}
