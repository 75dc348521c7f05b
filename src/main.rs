//! Sentiment Analysis API — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentiment_api::api::{create_router, AppState};
use sentiment_api::metrics::Metrics;

const ENV_BIND_ADDR: &str = "SENTIMENT_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sentiment_api=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Install the Prometheus recorder before any handler increments a counter.
    let metrics = Metrics::init();

    // The model is constructed once here and shared by every request.
    let state = AppState::new();
    let router = create_router(state).merge(metrics.router());

    let addr = std::env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "sentiment api listening");

    axum::serve(listener, router).await?;
    Ok(())
}
