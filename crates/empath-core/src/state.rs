//! The emotional state of a piece of text.
//!
//! An [`EmotionalState`] is the final output of one analysis pass: the
//! normalized input text, a general emotional weight, an overall valence,
//! and a ranked collection of per-category weights. States are immutable
//! once built, except for the caller-assigned `previous` link that chains
//! states into a conversation history.

use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, EmotionEntry};

/// Emotional content recognized in a text.
///
/// Weights are nominally between 0.0 (no emotion) and 1.0 (full emotion),
/// though heuristic boosts may push individual weights above 1.0. Valence
/// is -1, 0, or 1 for net negative, neutral, and positive emotion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmotionalState {
    text: String,
    general_weight: f64,
    valence: i8,
    emotions: Vec<EmotionEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous: Option<Box<EmotionalState>>,
}

impl EmotionalState {
    /// Build a state from a ranked-or-not set of entries.
    ///
    /// Entries are sorted into the strict ranking order (weight descending,
    /// category order ascending). When `entries` is empty, a single
    /// [`Emotion::Neutral`] entry with weight `(0.2 + general_weight) / 1.2`
    /// is emitted instead, so a state always carries at least one entry.
    pub fn new(
        text: impl Into<String>,
        mut entries: Vec<EmotionEntry>,
        general_weight: f64,
        valence: i8,
    ) -> Self {
        debug_assert!((-1..=1).contains(&valence));
        if entries.is_empty() {
            entries.push(EmotionEntry::new(
                Emotion::Neutral,
                (0.2 + general_weight) / 1.2,
            ));
        }
        entries.sort();

        Self {
            text: text.into(),
            general_weight,
            valence,
            emotions: entries,
            previous: None,
        }
    }

    /// A state carrying no emotional evidence at all.
    pub fn empty(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new(), 0.0, 0)
    }

    /// The analyzed text, as normalized by the engine.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The general emotional weight (maximum over all matched samples).
    pub fn general_weight(&self) -> f64 {
        self.general_weight
    }

    /// The overall valence: -1 (negative), 0 (neutral), or 1 (positive).
    pub fn valence(&self) -> i8 {
        self.valence
    }

    /// All entries, strongest first.
    pub fn emotions(&self) -> &[EmotionEntry] {
        &self.emotions
    }

    /// The entry with the highest weight.
    pub fn strongest_emotion(&self) -> EmotionEntry {
        // new() guarantees at least the neutral entry.
        self.emotions[0]
    }

    /// Up to `n` entries with the highest weights, strongest first.
    pub fn strongest_emotions(&self, n: usize) -> &[EmotionEntry] {
        &self.emotions[..n.min(self.emotions.len())]
    }

    /// The weight for a category, or 0.0 if it did not score.
    pub fn weight(&self, emotion: Emotion) -> f64 {
        self.emotions
            .iter()
            .find(|e| e.emotion == emotion)
            .map_or(0.0, |e| e.weight)
    }

    /// Happiness weight.
    pub fn happiness_weight(&self) -> f64 {
        self.weight(Emotion::Happiness)
    }

    /// Sadness weight.
    pub fn sadness_weight(&self) -> f64 {
        self.weight(Emotion::Sadness)
    }

    /// Fear weight.
    pub fn fear_weight(&self) -> f64 {
        self.weight(Emotion::Fear)
    }

    /// Anger weight.
    pub fn anger_weight(&self) -> f64 {
        self.weight(Emotion::Anger)
    }

    /// Disgust weight.
    pub fn disgust_weight(&self) -> f64 {
        self.weight(Emotion::Disgust)
    }

    /// Surprise weight.
    pub fn surprise_weight(&self) -> f64 {
        self.weight(Emotion::Surprise)
    }

    /// The previous state in a conversation chain, if any.
    pub fn previous(&self) -> Option<&EmotionalState> {
        self.previous.as_deref()
    }

    /// Link a previous state, forming a conversation history chain.
    ///
    /// The engine never sets this; it is for callers tracking a dialogue.
    pub fn set_previous(&mut self, previous: EmotionalState) {
        self.previous = Some(Box::new(previous));
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Text: {}", self.text)?;
        writeln!(f, "General weight: {}", self.general_weight)?;
        writeln!(f, "Valence: {}", self.valence)?;
        writeln!(f, "Happiness weight: {}", self.happiness_weight())?;
        writeln!(f, "Sadness weight: {}", self.sadness_weight())?;
        writeln!(f, "Anger weight: {}", self.anger_weight())?;
        writeln!(f, "Fear weight: {}", self.fear_weight())?;
        writeln!(f, "Disgust weight: {}", self.disgust_weight())?;
        write!(f, "Surprise weight: {}", self.surprise_weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_gets_neutral_fallback() {
        let state = EmotionalState::empty("whatever");

        assert_eq!(state.emotions().len(), 1);
        assert_eq!(state.strongest_emotion().emotion, Emotion::Neutral);
        let expected = 0.2 / 1.2;
        assert!((state.strongest_emotion().weight - expected).abs() < 1e-12);
        assert_eq!(state.valence(), 0);
    }

    #[test]
    fn test_neutral_fallback_uses_general_weight() {
        let state = EmotionalState::new("hm", Vec::new(), 0.4, 0);
        let expected = (0.2 + 0.4) / 1.2;
        assert!((state.strongest_emotion().weight - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entries_are_ranked() {
        let state = EmotionalState::new(
            "mixed feelings",
            vec![
                EmotionEntry::new(Emotion::Fear, 0.3),
                EmotionEntry::new(Emotion::Happiness, 0.7),
            ],
            0.7,
            1,
        );

        assert_eq!(state.strongest_emotion().emotion, Emotion::Happiness);
        assert_eq!(state.strongest_emotions(1).len(), 1);
        assert_eq!(state.strongest_emotions(10).len(), 2);
        assert!((state.fear_weight() - 0.3).abs() < 1e-12);
        assert_eq!(state.sadness_weight(), 0.0);
    }

    #[test]
    fn test_previous_chain() {
        let first = EmotionalState::empty("hi");
        let mut second = EmotionalState::empty("hi again");
        second.set_previous(first);

        assert_eq!(second.previous().unwrap().text(), "hi");
        assert!(second.previous().unwrap().previous().is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let state = EmotionalState::new(
            "great",
            vec![EmotionEntry::new(Emotion::Happiness, 0.8)],
            0.8,
            1,
        );
        let json = serde_json::to_string(&state).unwrap();
        let parsed: EmotionalState = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.text(), state.text());
        assert_eq!(parsed.valence(), state.valence());
        assert!((parsed.happiness_weight() - state.happiness_weight()).abs() < 1e-12);
    }

    #[test]
    fn test_display_lists_all_weights() {
        let state = EmotionalState::empty("");
        let rendered = state.to_string();
        for line in [
            "General weight:",
            "Valence:",
            "Happiness weight:",
            "Surprise weight:",
        ] {
            assert!(rendered.contains(line), "missing {line}");
        }
    }
}
