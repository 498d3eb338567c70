//! Working affect samples.
//!
//! A sample is the per-match working copy of a lexicon entry. The shared
//! table entries themselves are never mutated; every match gets its own
//! sample, scaled by heuristic coefficients and discarded at the end of the
//! analysis pass.

use crate::lexicon::AffectEntry;

/// A mutable working copy of an [`AffectEntry`], created per match.
#[derive(Clone, Debug)]
pub(crate) struct AffectSample {
    word: String,
    general_weight: f64,
    happiness_weight: f64,
    sadness_weight: f64,
    anger_weight: f64,
    fear_weight: f64,
    disgust_weight: f64,
    surprise_weight: f64,
    polarity: i8,
}

impl AffectSample {
    /// The synthetic sample injected for a `?!`/`!?` sentence: surprise
    /// weight 1.0, everything else zero.
    pub(crate) fn surprise_marker() -> Self {
        Self {
            word: "?!".to_string(),
            general_weight: 0.0,
            happiness_weight: 0.0,
            sadness_weight: 0.0,
            anger_weight: 0.0,
            fear_weight: 0.0,
            disgust_weight: 0.0,
            surprise_weight: 1.0,
            polarity: 1,
        }
    }

    /// The lexicon word this sample was matched from.
    pub(crate) fn word(&self) -> &str {
        &self.word
    }

    /// Multiply all seven weights by a coefficient.
    ///
    /// No upper clamp: repeated heuristic boosts may push weights past 1.0,
    /// and ranking stays meaningful because only relative order is read.
    pub(crate) fn scale(&mut self, coefficient: f64) {
        debug_assert!(coefficient > 0.0);
        self.general_weight *= coefficient;
        self.happiness_weight *= coefficient;
        self.sadness_weight *= coefficient;
        self.anger_weight *= coefficient;
        self.fear_weight *= coefficient;
        self.disgust_weight *= coefficient;
        self.surprise_weight *= coefficient;
    }

    /// Invert this sample's contribution when it falls inside a negation
    /// scope: the polarity sign flips and the happiness and sadness weights
    /// swap ("not happy" reads as sad, "not sad" as happy).
    pub(crate) fn invert_polarity(&mut self) {
        self.polarity = -self.polarity;
        std::mem::swap(&mut self.happiness_weight, &mut self.sadness_weight);
    }

    pub(crate) fn general_weight(&self) -> f64 {
        self.general_weight
    }

    pub(crate) fn happiness_weight(&self) -> f64 {
        self.happiness_weight
    }

    pub(crate) fn sadness_weight(&self) -> f64 {
        self.sadness_weight
    }

    pub(crate) fn anger_weight(&self) -> f64 {
        self.anger_weight
    }

    pub(crate) fn fear_weight(&self) -> f64 {
        self.fear_weight
    }

    pub(crate) fn disgust_weight(&self) -> f64 {
        self.disgust_weight
    }

    pub(crate) fn surprise_weight(&self) -> f64 {
        self.surprise_weight
    }

    pub(crate) fn polarity(&self) -> i8 {
        self.polarity
    }
}

impl From<AffectEntry> for AffectSample {
    fn from(entry: AffectEntry) -> Self {
        Self {
            word: entry.word().to_string(),
            general_weight: entry.general_weight(),
            happiness_weight: entry.happiness_weight(),
            sadness_weight: entry.sadness_weight(),
            anger_weight: entry.anger_weight(),
            fear_weight: entry.fear_weight(),
            disgust_weight: entry.disgust_weight(),
            surprise_weight: entry.surprise_weight(),
            polarity: entry.polarity(),
        }
    }
}
