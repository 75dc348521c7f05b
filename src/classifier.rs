// src/classifier.rs
//! Sentiment model seam and the classification pipeline.
//!
//! The service never implements classification inline; it talks to a
//! [`SentimentModel`] behind a trait object so the bundled lexicon model can
//! be swapped for any other pretrained backend. The pipeline around the
//! model (normalize, empty short-circuit, truncation, confidence floor)
//! lives in [`classify`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::normalize::clean_text;
use crate::policy::apply_floor;

/// Inputs longer than this are truncated before reaching the model.
/// Guards against unbounded latency on pathological inputs.
pub const MAX_CLASSIFIER_INPUT_CHARS: usize = 1000;

/// A raw model prediction: label plus confidence in [0, 1].
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

/// A pretrained sentiment backend.
pub trait SentimentModel: Send + Sync {
    fn predict(&self, text: &str) -> anyhow::Result<Prediction>;
}

/// Run the full classification pipeline for one text.
///
/// Normalizes the input; empty text short-circuits to `("NEUTRAL", 0.0)`
/// without invoking the model. Otherwise the first
/// [`MAX_CLASSIFIER_INPUT_CHARS`] characters go to the model, the returned
/// label is uppercased, and the confidence floor is applied. The score is
/// reported as the model produced it.
pub fn classify(model: &dyn SentimentModel, text: &str) -> anyhow::Result<(String, f32)> {
    let t = clean_text(text);
    if t.is_empty() {
        return Ok(("NEUTRAL".to_string(), 0.0));
    }
    let p = model.predict(truncate_chars(&t, MAX_CLASSIFIER_INPUT_CHARS))?;
    let label = apply_floor(&p.label, p.score);
    Ok((label, p.score))
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

// Pretrained weights for the bundled model, parsed once per process.
static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// The bundled pretrained backend: a weighted lexicon with negation
/// handling. Cheap to construct; the weights load lazily on first use and
/// are shared by every instance.
#[derive(Debug, Clone, Default)]
pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }

    /// Signed lexicon score plus token count.
    /// Negation: a negator within the previous 1..=3 tokens flips the sign
    /// of a word's lexicon score.
    fn score_text(&self, text: &str) -> (i32, usize) {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score: i32 = 0;

        for i in 0..tokens.len() {
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            let base = self.word_score(tokens[i].as_str());
            if base != 0 {
                score += if negated { -base } else { base };
            }
        }

        (score, tokens.len())
    }
}

impl SentimentModel for LexiconModel {
    fn predict(&self, text: &str) -> anyhow::Result<Prediction> {
        let (raw, _tokens) = self.score_text(text);
        let label = match raw {
            r if r > 0 => "POSITIVE",
            r if r < 0 => "NEGATIVE",
            _ => "NEUTRAL",
        };
        // Map |raw| in 0..=5 onto 0.5..=1.0; a zero hit sits at 0.5,
        // below the confidence floor.
        let score = 0.5 + 0.1 * (raw.unsigned_abs().min(5) as f32);
        Ok(Prediction {
            label: label.to_string(),
            score,
        })
    }
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "isnt" | "wasnt" | "arent" | "wont" | "cant" | "cannot" | "without"
    )
}
