use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use swn_core::{CuratedArticle, Error, InferenceModel, Prompt, RawArticle, Result};

pub const TEMPERATURE: f32 = 0.2;
pub const MAX_TOKENS: u32 = 900;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that reads a list of news articles (title + description + url).
For each article, produce a JSON object with fields: title, summary (max 40 words), source, url, publishedAt.
Return a JSON array only.";

const ARTICLE_DELIMITER: &str = "\n---\n";

lazy_static! {
    // Greedy on purpose: spans from the first '[' to the last ']'.
    static ref JSON_ARRAY: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
}

/// Turns raw headlines into summarized articles.
///
/// `curate` never fails: any problem with the model call or its reply is
/// logged and replaced by a direct field copy of the input.
pub struct Curator {
    model: Arc<dyn InferenceModel>,
}

impl fmt::Debug for Curator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curator")
            .field("model", &self.model.name())
            .finish()
    }
}

impl Curator {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    pub async fn curate(&self, articles: &[RawArticle]) -> Vec<CuratedArticle> {
        if articles.is_empty() {
            return Vec::new();
        }

        match self.summarize(articles).await {
            Ok(curated) => curated,
            Err(e) => {
                tracing::warn!("AI curation via {} failed, falling back to naive mapping: {}", self.model.name(), e);
                fallback(articles)
            }
        }
    }

    async fn summarize(&self, articles: &[RawArticle]) -> Result<Vec<CuratedArticle>> {
        let reply = self.model.generate(&build_prompt(articles)).await?;
        parse_curated(&reply)
    }
}

pub fn build_prompt(articles: &[RawArticle]) -> Prompt {
    let content = articles
        .iter()
        .enumerate()
        .map(|(i, article)| {
            format!(
                "Article {}:\nTitle: {}\nDescription: {}\nSource: {}\nURL: {}\n",
                i + 1,
                article.title.as_deref().unwrap_or_default(),
                article.description.as_deref().unwrap_or_default(),
                article.source_name().unwrap_or_default(),
                article.url.as_deref().unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join(ARTICLE_DELIMITER);

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user: format!("Articles:\n\n{}\n\nReturn a JSON array.", content),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// Returns the bracket-delimited span of `text`, if there is one.
pub fn extract_json_array(text: &str) -> Option<&str> {
    JSON_ARRAY.find(text).map(|m| m.as_str())
}

pub fn parse_curated(reply: &str) -> Result<Vec<CuratedArticle>> {
    let json = extract_json_array(reply)
        .ok_or_else(|| Error::Inference("reply contained no JSON array".to_string()))?;
    Ok(serde_json::from_str(json)?)
}

pub fn fallback(articles: &[RawArticle]) -> Vec<CuratedArticle> {
    articles.iter().map(CuratedArticle::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use swn_core::RawSource;

    struct ScriptedModel {
        reply: Result<String>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self { reply: Ok(text.to_string()), calls: AtomicUsize::new(0) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: Err(Error::Inference("boom".to_string())),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl InferenceModel for ScriptedModel {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn generate(&self, _prompt: &Prompt) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(Error::Inference(e.to_string())),
            }
        }
    }

    fn raw(title: &str, description: Option<&str>) -> RawArticle {
        RawArticle {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
            source: Some(RawSource { id: None, name: Some(format!("{} Times", title)) }),
            url: Some(format!("https://news.example/{}", title)),
            published_at: Some("2024-03-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_build_prompt() {
        let articles = vec![raw("A", Some("first")), RawArticle::default()];
        let prompt = build_prompt(&articles);

        assert!(prompt.system.contains("title, summary (max 40 words), source, url, publishedAt"));
        assert!(prompt.system.contains("Return a JSON array only."));
        assert_eq!(
            prompt.user,
            "Articles:\n\n\
             Article 1:\nTitle: A\nDescription: first\nSource: A Times\nURL: https://news.example/A\n\
             \n---\n\
             Article 2:\nTitle: \nDescription: \nSource: \nURL: \n\
             \n\nReturn a JSON array."
        );
        assert_eq!(prompt.temperature, TEMPERATURE);
        assert_eq!(prompt.max_tokens, MAX_TOKENS);
    }

    #[test]
    fn test_extract_json_array() {
        assert_eq!(extract_json_array("Here you go: [1, 2] enjoy"), Some("[1, 2]"));
        assert_eq!(extract_json_array("```json\n[\n{\"a\": [1]}\n]\n```"), Some("[\n{\"a\": [1]}\n]"));
        assert_eq!(extract_json_array("[1] and [2]"), Some("[1] and [2]"));
        assert_eq!(extract_json_array("{\"title\": \"x\"}"), None);
        assert_eq!(extract_json_array(""), None);
    }

    #[test]
    fn test_parse_curated() {
        let reply = r#"Sure! [{"title":"A","summary":"short","source":"A Times","url":null,"publishedAt":null}]"#;
        let curated = parse_curated(reply).unwrap();
        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].summary, "short");
        assert_eq!(curated[0].source.as_deref(), Some("A Times"));

        let curated = parse_curated(r#"[{"title":null,"summary":"kept","source":null}]"#).unwrap();
        assert_eq!(curated[0].title, "");
        assert_eq!(curated[0].summary, "kept");

        assert!(parse_curated("no array here").is_err());
        assert!(parse_curated("[1] and [2]").is_err());
        assert!(parse_curated(r#"[{"title":"A","source":{"name":"x"}}]"#).is_err());
    }

    #[test]
    fn test_fallback_preserves_order_and_description() {
        let articles = vec![raw("A", Some("about A")), raw("B", None)];
        let curated = fallback(&articles);
        assert_eq!(curated.len(), 2);
        assert_eq!(curated[0].title, "A");
        assert_eq!(curated[0].summary, "about A");
        assert_eq!(curated[1].title, "B");
        assert_eq!(curated[1].summary, "");
        assert_eq!(curated[1].url.as_deref(), Some("https://news.example/B"));
    }

    #[tokio::test]
    async fn test_curate_uses_model_reply() {
        let model = ScriptedModel::replying(
            r#"[{"title":"A!","summary":"AI summary","source":"A Times","url":"https://news.example/A","publishedAt":"2024-03-01T10:00:00Z"}]"#,
        );
        let curator = Curator::new(model.clone());
        let curated = curator.curate(&[raw("A", Some("about A"))]).await;

        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].title, "A!");
        assert_eq!(curated[0].summary, "AI summary");
    }

    #[tokio::test]
    async fn test_curate_falls_back_on_model_error() {
        let model = ScriptedModel::failing();
        let curator = Curator::new(model.clone());
        let articles = vec![raw("A", Some("about A")), raw("B", None)];

        let curated = curator.curate(&articles).await;
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert_eq!(curated, fallback(&articles));
    }

    #[tokio::test]
    async fn test_curate_falls_back_on_garbage_reply() {
        let curator = Curator::new(ScriptedModel::replying("I cannot help with that."));
        let articles = vec![raw("A", Some("about A"))];
        assert_eq!(curator.curate(&articles).await, fallback(&articles));

        let curator = Curator::new(ScriptedModel::replying("[{\"title\": \"A\",]"));
        assert_eq!(curator.curate(&articles).await, fallback(&articles));
    }

    #[tokio::test]
    async fn test_curate_empty_input() {
        let model = ScriptedModel::replying("[]");
        assert!(Curator::new(model.clone()).curate(&[]).await.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);

        let model = ScriptedModel::failing();
        assert!(Curator::new(model).curate(&[]).await.is_empty());
    }
}
