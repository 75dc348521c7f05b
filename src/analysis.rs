// src/analysis.rs
//! Request/response types and the single-item / batch pipelines.
//!
//! Pure orchestration over the classifier seam; no HTTP types in here so
//! the whole flow stays unit-testable. The batch loop converts per-item
//! failures into data (`BatchEntry::Error`) instead of letting them cross
//! the batch boundary.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::{classify, SentimentModel};
use crate::clock::ist_now_iso;
use crate::ids::make_id;
use crate::normalize::clean_text;

/// Hard cap on batch size; over-limit batches are rejected before any
/// item is processed.
pub const MAX_BATCH_ITEMS: usize = 100;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default = "default_true")]
    pub include_confidence: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub items: Vec<AnalyzeRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub analysis_id: String,
    /// The normalized text that was actually classified.
    pub text: String,
    pub sentiment: String,
    /// Absent (not null) when the caller opted out via `include_confidence`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    pub timestamp: String,
}

/// One slot in the batch output: either a result or an inline failure
/// carrying the item's position in the input.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Ok(AnalysisResult),
    Error {
        error: String,
        index: usize,
        timestamp: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchMetrics {
    pub processed: usize,
    pub failed: usize,
    pub time_seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub results: Vec<BatchEntry>,
    pub metrics: BatchMetrics,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("text must not be empty")]
    EmptyText,

    #[error("items must not be empty")]
    EmptyBatch,

    #[error("max {MAX_BATCH_ITEMS} items allowed")]
    TooManyItems,

    #[error("{0}")]
    Model(#[from] anyhow::Error),
}

/// Analyze a single text. Fails with [`AnalysisError::EmptyText`] when the
/// input normalizes to nothing.
pub fn analyze_one(
    model: &dyn SentimentModel,
    raw_text: &str,
    include_confidence: bool,
) -> Result<AnalysisResult, AnalysisError> {
    let text = clean_text(raw_text);
    if text.is_empty() {
        return Err(AnalysisError::EmptyText);
    }

    let (sentiment, score) = classify(model, &text)?;

    Ok(AnalysisResult {
        analysis_id: make_id(),
        text,
        sentiment,
        confidence: include_confidence.then_some(score),
        timestamp: ist_now_iso(),
    })
}

/// Analyze up to [`MAX_BATCH_ITEMS`] texts independently, in input order.
///
/// Empty and over-limit batches are rejected eagerly. Each item then runs
/// the single-item pipeline; a failure becomes an error entry in that
/// item's slot and never affects its siblings.
pub fn analyze_batch(
    model: &dyn SentimentModel,
    items: &[AnalyzeRequest],
) -> Result<BatchOutcome, AnalysisError> {
    if items.is_empty() {
        return Err(AnalysisError::EmptyBatch);
    }
    if items.len() > MAX_BATCH_ITEMS {
        return Err(AnalysisError::TooManyItems);
    }

    let start = Instant::now();
    let mut results = Vec::with_capacity(items.len());
    let mut failed = 0usize;

    for (idx, item) in items.iter().enumerate() {
        match analyze_one(model, &item.text, item.include_confidence) {
            Ok(res) => results.push(BatchEntry::Ok(res)),
            Err(err) => {
                failed += 1;
                results.push(BatchEntry::Error {
                    error: err.to_string(),
                    index: idx,
                    timestamp: ist_now_iso(),
                });
            }
        }
    }

    Ok(BatchOutcome {
        metrics: BatchMetrics {
            processed: items.len(),
            failed,
            time_seconds: start.elapsed().as_secs_f64(),
        },
        results,
    })
}
