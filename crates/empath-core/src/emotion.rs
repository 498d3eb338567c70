//! Emotion categories and ranked per-category weights.
//!
//! Categories are the six defined by Ekman (happiness, sadness, fear,
//! anger, disgust, surprise) plus a neutral fallback. A ranked result is a
//! sequence of [`EmotionEntry`] values ordered by a strict total order, so
//! weight ties can never collapse two categories into one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One of the six Ekman emotion categories, or the neutral fallback.
///
/// Declaration order doubles as the tie-break order when two categories
/// carry the same weight. `Neutral` ranks last, but in practice it never
/// competes: it is only ever emitted alone, when no category scored above
/// zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Happiness (positive valence).
    Happiness,
    /// Sadness (negative valence).
    Sadness,
    /// Fear (negative valence).
    Fear,
    /// Anger (negative valence).
    Anger,
    /// Disgust (negative valence).
    Disgust,
    /// Surprise (positive valence).
    Surprise,
    /// Fallback when no category scored above zero.
    Neutral,
}

impl Emotion {
    /// All categories a lexicon entry can score, in tie-break order.
    pub const SCORED: [Emotion; 6] = [
        Emotion::Happiness,
        Emotion::Sadness,
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Surprise,
    ];
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Emotion::Happiness => "happiness",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

/// A single `(emotion, weight)` pair in a ranked emotional state.
///
/// Weights are nominally in `[0.0, 1.0]` but may exceed 1.0 after heuristic
/// boosts; ordering stays well-defined for any finite weight.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EmotionEntry {
    /// The emotion category.
    pub emotion: Emotion,
    /// The aggregated weight for this category.
    pub weight: f64,
}

impl EmotionEntry {
    /// Create a new entry.
    pub fn new(emotion: Emotion, weight: f64) -> Self {
        Self { emotion, weight }
    }
}

impl PartialEq for EmotionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EmotionEntry {}

impl PartialOrd for EmotionEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EmotionEntry {
    /// Strict total order: weight descending, then category order ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.emotion.cmp(&other.emotion))
    }
}

impl std::fmt::Display for EmotionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.emotion, self.weight)
    }
}
