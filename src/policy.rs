// src/policy.rs
//! Confidence-floor policy: uncertain predictions are reported as NEUTRAL.

/// Predictions below this score keep their score but lose their label.
pub const CONFIDENCE_FLOOR: f32 = 0.55;

/// Uppercase the raw model label and downgrade it to NEUTRAL when the score
/// is below [`CONFIDENCE_FLOOR`]. The score itself is never touched.
pub fn apply_floor(raw_label: &str, score: f32) -> String {
    if score < CONFIDENCE_FLOOR {
        return "NEUTRAL".to_string();
    }
    raw_label.to_ascii_uppercase()
}
