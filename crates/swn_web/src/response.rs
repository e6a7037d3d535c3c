use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use swn_core::{CuratedArticle, Error};

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub success: bool,
    pub articles: Vec<CuratedArticle>,
}

impl NewsResponse {
    pub fn ok(articles: Vec<CuratedArticle>) -> Self {
        Self { success: true, articles }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Handler-boundary error: 401 for a credential mismatch, 500 for anything else.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Error /api/news: {}", self.0);
        }
        let body = ErrorBody {
            success: false,
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a panic inside a handler into the same 500 shape as any other failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "internal error".to_string()
    };
    tracing::error!("Handler panicked: {}", message);
    let body = ErrorBody {
        success: false,
        error: message,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
