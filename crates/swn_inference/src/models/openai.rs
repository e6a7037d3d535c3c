use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use swn_core::{Error, InferenceModel, Prompt, Result};
use url::Url;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiModel {
    client: Client,
    api_key: String,
    model_name: String,
    base_url: Url,
}

impl OpenAiModel {
    pub fn new(api_key: String, model_name: String, base_url: Url) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model_name,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.as_str().trim_end_matches('/'))
    }
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[async_trait]
impl InferenceModel for OpenAiModel {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let request = ChatRequest {
            model: &self.model_name,
            messages: vec![
                ChatMessage { role: "system", content: &prompt.system },
                ChatMessage { role: "user", content: &prompt.user },
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        let response = self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Inference("completion contained no message content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::{HeaderMap, StatusCode}, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{}/v1", addr)).unwrap()
    }

    fn prompt() -> Prompt {
        Prompt {
            system: "be brief".to_string(),
            user: "Articles:".to_string(),
            temperature: 0.2,
            max_tokens: 900,
        }
    }

    #[tokio::test]
    async fn test_generate_sends_chat_request() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let reply = format!(
                    "{}|{}|{}|{}|{}|{}",
                    auth,
                    body["model"].as_str().unwrap_or_default(),
                    body["messages"][0]["role"].as_str().unwrap_or_default(),
                    body["messages"][1]["content"].as_str().unwrap_or_default(),
                    body["temperature"],
                    body["max_tokens"],
                );
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": reply } }] }))
            }),
        );
        let model = OpenAiModel::new(
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
            serve(router).await,
        );

        let reply = model.generate(&prompt()).await.unwrap();
        let parts: Vec<&str> = reply.split('|').collect();
        assert_eq!(parts[0], "Bearer sk-test");
        assert_eq!(parts[1], "gpt-4o-mini");
        assert_eq!(parts[2], "system");
        assert_eq!(parts[3], "Articles:");
        assert!(parts[4].starts_with("0.2"));
        assert_eq!(parts[5], "900");
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let model = OpenAiModel::new("k".to_string(), "m".to_string(), serve(router).await);
        assert!(matches!(model.generate(&prompt()).await, Err(Error::Inference(_))));
    }

    #[tokio::test]
    async fn test_auth_failure_is_an_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": { "message": "bad key" } }))) }),
        );
        let model = OpenAiModel::new("k".to_string(), "m".to_string(), serve(router).await);
        assert!(matches!(model.generate(&prompt()).await, Err(Error::Http(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let model = OpenAiModel::new(
            "sk-secret".to_string(),
            "gpt-4o-mini".to_string(),
            Url::parse("https://api.openai.com/v1").unwrap(),
        );
        assert!(!format!("{:?}", model).contains("sk-secret"));
        assert_eq!(model.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
