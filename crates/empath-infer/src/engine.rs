//! The inference engine.
//!
//! [`Empath::feel`] is the single entry point: it composes the six heuristic
//! rules with cross-token state (negation scope, previous word) inside a
//! two-level tokenization loop, and aggregates the matched samples into a
//! deterministic, strictly ranked [`EmotionalState`].

use std::sync::Arc;

use empath_core::{Emotion, EmotionEntry, EmotionalState};

use crate::heuristics;
use crate::lexicon::Lexicon;
use crate::sample::AffectSample;
use crate::tokenize;

/// Textual affect sensing engine.
///
/// Holds a loaded, immutable [`Lexicon`]; analysis is a pure function of the
/// input text and cannot fail once the engine exists. The engine is cheap to
/// clone and safe to share across threads.
#[derive(Clone, Debug)]
pub struct Empath {
    lexicon: Arc<Lexicon>,
}

impl Empath {
    /// Create an engine over an explicitly loaded lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Create an engine over the process-wide embedded lexicon.
    pub fn builtin() -> Self {
        Self {
            lexicon: Lexicon::shared(),
        }
    }

    /// The lexicon backing this engine.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Infer the emotional content of a text.
    ///
    /// Deterministic for a fixed lexicon and input; accepts any string,
    /// including the empty one, and degrades to the neutral fallback when
    /// nothing matches.
    pub fn feel(&self, text: &str) -> EmotionalState {
        let text = text.replace('\n', " ");
        let mut samples = Vec::new();

        for sentence in tokenize::sentences(&text) {
            self.analyze_sentence(sentence, &mut samples);
        }

        aggregate(text, &samples)
    }

    /// Gather working samples for one sentence.
    fn analyze_sentence(&self, sentence: &str, samples: &mut Vec<AffectSample>) {
        tracing::trace!(sentence, "analyzing sentence");

        // Rule 1 applies to every match in the sentence.
        let exclamation_coef = heuristics::exclamation_coef(&sentence.to_lowercase());

        // Rule 2: "?!" marks surprise on its own, lexicon match or not.
        if heuristics::has_surprise_combo(sentence) {
            samples.push(AffectSample::surprise_marker());
        }

        let mut negation_seen = false;
        let mut negation = String::new();
        let mut last_word = String::new();

        for token in tokenize::split_on(sentence, " ") {
            // Emoticons are matched on the raw space-delimited token, before
            // word-boundary segmentation would tear them apart.
            let emoticon = self
                .lexicon
                .lookup_emoticon(token)
                .or_else(|| self.lexicon.lookup_emoticon(&token.to_lowercase()));

            if let Some(entry) = emoticon {
                // Rule 3, retried on the folded token when the original
                // casing yields no repetition signal.
                let mut repetition_coef = heuristics::emoticon_repetition_coef(token, &entry);
                if repetition_coef == 1.0 {
                    repetition_coef =
                        heuristics::emoticon_repetition_coef(&token.to_lowercase(), &entry);
                }

                let mut sample = AffectSample::from(entry);
                sample.scale(exclamation_coef * repetition_coef);
                samples.push(sample);
                continue;
            }

            for word in tokenize::words(token) {
                let folded = word.to_lowercase();

                // Rule 4: remember the negation; its scope is checked per
                // matched word below.
                if self.lexicon.is_negation(&folded) {
                    negation = word.to_string();
                    negation_seen = true;
                }

                let matched = self
                    .lexicon
                    .lookup_word(&folded)
                    .or_else(|| self.lexicon.lookup_emoticon(&folded));

                if let Some(entry) = matched {
                    // Rule 5 reads the original casing, rule 6 the folded
                    // previous word.
                    let caps_coef = heuristics::caps_lock_coef(word);
                    let modifier_coef = heuristics::modifier_coef(
                        self.lexicon
                            .is_intensity_modifier(&last_word.to_lowercase()),
                    );

                    let mut sample = AffectSample::from(entry);
                    if negation_seen && in_same_clause(&negation, sample.word(), sentence) {
                        sample.invert_polarity();
                    }
                    sample.scale(exclamation_coef * caps_coef * modifier_coef);
                    samples.push(sample);
                }

                // Unmatched words still advance the previous-word cursor.
                last_word = word.to_string();
            }
        }
    }
}

/// True when no clause punctuation (`, . ; : -`) separates the negation from
/// the matched word within the sentence.
///
/// Both occurrences are located case-folded; the span between the end of the
/// earlier and the start of the later is scanned. When either occurrence
/// cannot be located the words are treated as sharing a clause.
fn in_same_clause(negation: &str, word: &str, sentence: &str) -> bool {
    let folded = sentence.to_lowercase();
    let negation = negation.to_lowercase();
    let word = word.to_lowercase();

    let (Some(i), Some(j)) = (folded.find(&negation), folded.find(&word)) else {
        return true;
    };

    let (start, end) = if i < j {
        (i + negation.len(), j)
    } else {
        (j + word.len(), i)
    };
    if start >= end {
        return true;
    }

    !folded[start..end]
        .chars()
        .any(|c| matches!(c, ',' | '.' | ';' | ':' | '-'))
}

/// Fold all samples into the final ranked state.
fn aggregate(text: String, samples: &[AffectSample]) -> EmotionalState {
    let mut valence_sum: i32 = 0;
    let mut general_weight: f64 = 0.0;
    // Per-category maxima, in Emotion::SCORED order.
    let mut maxima = [0.0_f64; 6];

    for sample in samples {
        valence_sum += i32::from(sample.polarity());
        general_weight = general_weight.max(sample.general_weight());

        let weights = [
            sample.happiness_weight(),
            sample.sadness_weight(),
            sample.fear_weight(),
            sample.anger_weight(),
            sample.disgust_weight(),
            sample.surprise_weight(),
        ];
        for (slot, weight) in maxima.iter_mut().zip(weights) {
            *slot = slot.max(weight);
        }
    }

    let valence: i8 = match valence_sum {
        v if v > 0 => 1,
        v if v < 0 => -1,
        _ => 0,
    };

    let entries: Vec<EmotionEntry> = Emotion::SCORED
        .into_iter()
        .zip(maxima)
        .filter(|&(_, weight)| weight > 0.0)
        .map(|(emotion, weight)| EmotionEntry::new(emotion, weight))
        .collect();

    EmotionalState::new(text, entries, general_weight, valence)
}

/// Analyze a text with the embedded default lexicon.
///
/// Convenience for simple use cases; construct an [`Empath`] explicitly to
/// supply your own lexicon.
pub fn feel(text: &str) -> EmotionalState {
    Empath::builtin().feel(text)
}
