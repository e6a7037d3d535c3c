use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use swn_core::Error;
use crate::response::{ApiError, NewsResponse};
use crate::AppState;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const API_KEY_HEADER: &str = "x-api-key";
pub const BANNER: &str = "✅ SmartWorldNews backend is running! Use /api/news to fetch AI-summarized news.";

#[derive(Debug, Default, PartialEq)]
pub struct NewsParams {
    pub q: Option<String>,
    // Kept as text so a malformed value falls back to the default instead of rejecting the request.
    pub page_size: Option<String>,
}

impl NewsParams {
    /// Repeated keys keep their last value; an unparseable query string means no parameters.
    pub fn from_query(query: Result<Query<HashMap<String, String>>, QueryRejection>) -> Self {
        let Ok(Query(mut map)) = query else {
            return Self::default();
        };
        Self {
            q: map.remove("q"),
            page_size: map.remove("pageSize"),
        }
    }
}

/// Reads a page size the way a lenient integer parse does: leading digits
/// count, anything else (including zero) means the default.
pub fn parse_page_size(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_PAGE_SIZE;
    };
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<u32>() {
        Ok(size) if size > 0 => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}

pub fn cache_key(query: &str, page_size: u32) -> String {
    format!("news:{}:{}", query, page_size)
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<NewsResponse>, ApiError> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if !state.is_authorized(presented) {
        tracing::warn!("Rejected /api/news request with missing or wrong {}", API_KEY_HEADER);
        return Err(Error::Unauthorized.into());
    }

    let params = NewsParams::from_query(query);
    let query = params.q.unwrap_or_default();
    let page_size = parse_page_size(params.page_size.as_deref());
    let key = cache_key(&query, page_size);

    if let Some(articles) = state.cache.get(&key).await {
        tracing::debug!("Cache hit for {}", key);
        return Ok(Json(NewsResponse::ok(articles)));
    }

    tracing::debug!("Cache miss for {}, fetching from {}", key, state.source.name());
    let raw = state.source.fetch(&query, page_size).await?;
    let curated = state.curator.curate(&raw).await;
    state.cache.set(&key, curated.clone()).await;

    Ok(Json(NewsResponse::ok(curated)))
}

pub async fn ping() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub async fn banner() -> &'static str {
    BANNER
}
