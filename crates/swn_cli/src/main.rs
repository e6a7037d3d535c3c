use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use swn_inference::{create_model, Curator};
use swn_sources::NewsApiSource;
use swn_storage::MemoryCache;
use swn_web::{create_app, AppState};
use tracing::{info, warn};

mod config;
mod logging;

use config::Cli;

const SWEEP_PERIOD: Duration = Duration::from_secs(600);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_logging();
    let cli = Cli::parse();

    if cli.newsapi_key().is_none() || cli.inference_config().api_key.is_none() {
        warn!("Make sure NEWSAPI_KEY and OPENAI_API_KEY are set in .env");
    }

    let source = Arc::new(NewsApiSource::new(cli.newsapi_key(), cli.newsapi_url.clone()));
    let model = create_model(cli.inference_config());
    info!("🧠 Curation model: {}", model.name());
    let curator = Arc::new(Curator::new(model));

    let cache = MemoryCache::new(cli.cache_config());
    let sweeper = cache.spawn_sweeper(SWEEP_PERIOD);
    info!("💾 Result cache ready (ttl {}s)", cache.ttl().as_secs());

    let state = AppState::new(source, curator, Arc::new(cache), cli.api_key());
    if state.api_key.is_none() {
        info!("🔓 API_KEY not set, /api/news is open");
    }
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(cli.listen_addr()).await?;
    info!("📰 News-AI backend listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("👋 Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
