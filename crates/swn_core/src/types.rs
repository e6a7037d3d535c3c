use serde::{Deserialize, Deserializer, Serialize};

/// An article as the headline provider returns it. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawArticle {
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// The normalized article shape served to clients and kept in the cache.
///
/// Serialized field set is fixed: `title`, `summary`, `source`, `url` and
/// `publishedAt`, with the optional ones written as `null` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedArticle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&RawArticle> for CuratedArticle {
    /// Direct field copy used when the summarizer is unavailable.
    fn from(raw: &RawArticle) -> Self {
        Self {
            title: raw.title.clone().unwrap_or_default(),
            summary: raw.description.clone().unwrap_or_default(),
            source: raw.source_name().map(str::to_string),
            url: raw.url.clone(),
            published_at: raw.published_at.clone(),
        }
    }
}
