// src/api.rs
//! Axum surface: routes, shared state, and the error → status mapping.

use std::sync::Arc;

use axum::extract::State;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::analysis::{
    analyze_batch, analyze_one, AnalysisError, AnalysisResult, AnalyzeRequest, BatchOutcome,
    BatchRequest,
};
use crate::classifier::{LexiconModel, SentimentModel};

#[derive(Clone)]
pub struct AppState {
    model: Arc<dyn SentimentModel>,
}

impl AppState {
    /// State backed by the bundled lexicon model.
    pub fn new() -> Self {
        Self::with_model(Arc::new(LexiconModel::new()))
    }

    /// Inject an alternative pretrained backend (tests, other models).
    pub fn with_model(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/analyze", post(analyze))
        .route("/api/batch-analyze", post(batch_analyze))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalysisError::EmptyText | AnalysisError::EmptyBatch => StatusCode::BAD_REQUEST,
            AnalysisError::TooManyItems => StatusCode::PAYLOAD_TOO_LARGE,
            AnalysisError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &self {
            AnalysisError::Model(err) => warn!(error = ?err, "classifier failure"),
            other => debug!(%other, "request rejected"),
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    counter!("sentiment_analyze_requests_total").increment(1);
    let res = analyze_one(state.model.as_ref(), &body.text, body.include_confidence)?;
    Ok(Json(res))
}

async fn batch_analyze(
    State(state): State<AppState>,
    Json(body): Json<BatchRequest>,
) -> Result<Json<BatchOutcome>, AnalysisError> {
    counter!("sentiment_batch_requests_total").increment(1);
    let out = analyze_batch(state.model.as_ref(), &body.items)?;
    if out.metrics.failed > 0 {
        counter!("sentiment_batch_items_failed_total").increment(out.metrics.failed as u64);
    }
    debug!(
        processed = out.metrics.processed,
        failed = out.metrics.failed,
        elapsed = out.metrics.time_seconds,
        "batch analyzed"
    );
    Ok(Json(out))
}
