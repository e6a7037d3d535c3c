use async_trait::async_trait;
use crate::Result;

/// A single chat-style generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait InferenceModel: Send + Sync {
    fn name(&self) -> &str;

    /// Sends the prompt and returns the model's raw text reply.
    async fn generate(&self, prompt: &Prompt) -> Result<String>;
}
