use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

pub mod handlers;
pub mod response;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::banner))
        .route("/api/ping", get(handlers::ping))
        .route("/api/news", get(handlers::news))
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use swn_core::{CuratedArticle, Result, Error};
    pub use crate::{create_app, AppState};
}
