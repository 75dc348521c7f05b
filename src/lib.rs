// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analysis;
pub mod api;
pub mod classifier;
pub mod clock;
pub mod ids;
pub mod metrics;
pub mod normalize;
pub mod policy;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::classifier::{LexiconModel, Prediction, SentimentModel};
