//! The affect lexicon: word and emoticon tables plus negation and
//! intensity-modifier word lists.
//!
//! A [`Lexicon`] is loaded once and read-only afterwards. Every lookup
//! returns an independent copy of the stored entry, because the same entry
//! may be matched many times across a text and each match gets its own
//! heuristically scaled weights.
//!
//! ## Resource formats
//!
//! A lexicon resource is UTF-8 text, one entry per line:
//!
//! ```text
//! <word> <general> <happiness> <sadness> <anger> <fear> <disgust> <surprise>
//! ```
//!
//! with whitespace-delimited decimal weights. The word-lists resource is a
//! `key=value` configuration file exposing `negations` and
//! `intensity.modifiers`, each a comma-plus-space-delimited word list.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use empath_core::LexiconError;

use crate::tokenize;

const BUILTIN_LEXICON: &str = include_str!("../data/lexicon.txt");
const BUILTIN_EMOTICONS: &str = include_str!("../data/lexicon_emoticons.txt");
const BUILTIN_WORD_LISTS: &str = include_str!("../data/keywords.properties");

/// An immutable lexicon record: a word or emoticon pattern with its seven
/// emotional weights.
///
/// The polarity sign is derived from the weight vector at load time:
/// happiness and surprise contribute positively, sadness, anger, fear, and
/// disgust negatively. The `starts_with_emoticon_prefix` flag is set at
/// match time (on the returned copy), never at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct AffectEntry {
    word: String,
    general_weight: f64,
    happiness_weight: f64,
    sadness_weight: f64,
    anger_weight: f64,
    fear_weight: f64,
    disgust_weight: f64,
    surprise_weight: f64,
    polarity: i8,
    starts_with_emoticon_prefix: bool,
}

impl AffectEntry {
    pub(crate) fn new(word: impl Into<String>, weights: [f64; 7]) -> Self {
        let [general, happiness, sadness, anger, fear, disgust, surprise] = weights;
        Self {
            word: word.into(),
            general_weight: general,
            happiness_weight: happiness,
            sadness_weight: sadness,
            anger_weight: anger,
            fear_weight: fear,
            disgust_weight: disgust,
            surprise_weight: surprise,
            polarity: derive_polarity(happiness, sadness, anger, fear, disgust, surprise),
            starts_with_emoticon_prefix: false,
        }
    }

    /// The lexicon word or emoticon pattern.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The general emotional weight.
    pub fn general_weight(&self) -> f64 {
        self.general_weight
    }

    /// Happiness weight.
    pub fn happiness_weight(&self) -> f64 {
        self.happiness_weight
    }

    /// Sadness weight.
    pub fn sadness_weight(&self) -> f64 {
        self.sadness_weight
    }

    /// Anger weight.
    pub fn anger_weight(&self) -> f64 {
        self.anger_weight
    }

    /// Fear weight.
    pub fn fear_weight(&self) -> f64 {
        self.fear_weight
    }

    /// Disgust weight.
    pub fn disgust_weight(&self) -> f64 {
        self.disgust_weight
    }

    /// Surprise weight.
    pub fn surprise_weight(&self) -> f64 {
        self.surprise_weight
    }

    /// Sign of this entry's contribution to overall valence: -1, 0, or 1.
    pub fn polarity(&self) -> i8 {
        self.polarity
    }

    /// True when this entry was matched as a prefix of a longer surface
    /// token (e.g. pattern `:)` inside `:)))`).
    pub fn starts_with_emoticon_prefix(&self) -> bool {
        self.starts_with_emoticon_prefix
    }

    fn as_prefix_match(&self) -> Self {
        let mut copy = self.clone();
        copy.starts_with_emoticon_prefix = true;
        copy
    }
}

fn derive_polarity(
    happiness: f64,
    sadness: f64,
    anger: f64,
    fear: f64,
    disgust: f64,
    surprise: f64,
) -> i8 {
    let positive = happiness + surprise;
    let negative = sadness + anger + fear + disgust;
    if positive > negative {
        1
    } else if negative > positive {
        -1
    } else {
        0
    }
}

/// The loaded lexicon store.
///
/// Initialization happens once; afterwards the store is immutable and safe
/// for unlimited concurrent reads. All lookups are exact and case-sensitive;
/// callers retry with case-folded input where the contract asks for it.
#[derive(Clone, Debug)]
pub struct Lexicon {
    words: HashMap<String, AffectEntry>,
    emoticons: Vec<AffectEntry>,
    negations: HashSet<String>,
    intensity_modifiers: HashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from three resource files.
    ///
    /// Fails with a [`LexiconError`] if any resource is unreadable or any
    /// line is malformed.
    pub fn load(
        lexicon_path: &Path,
        emoticon_path: &Path,
        word_lists_path: &Path,
    ) -> Result<Self, LexiconError> {
        let lexicon = read_resource(lexicon_path)?;
        let emoticons = read_resource(emoticon_path)?;
        let word_lists = read_resource(word_lists_path)?;

        Self::parse(
            &lexicon,
            &lexicon_path.display().to_string(),
            &emoticons,
            &emoticon_path.display().to_string(),
            &word_lists,
            &word_lists_path.display().to_string(),
        )
    }

    /// Build a lexicon from resource contents already in memory.
    pub fn from_strs(
        lexicon: &str,
        emoticons: &str,
        word_lists: &str,
    ) -> Result<Self, LexiconError> {
        Self::parse(
            lexicon,
            "lexicon",
            emoticons,
            "emoticon-lexicon",
            word_lists,
            "word-lists",
        )
    }

    /// The process-wide lexicon built from the embedded default resources.
    ///
    /// First use parses the embedded data; the `OnceLock` serializes
    /// concurrent first callers so the load happens exactly once.
    pub fn shared() -> Arc<Lexicon> {
        static SHARED: OnceLock<Arc<Lexicon>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| {
            Arc::new(
                Lexicon::from_strs(BUILTIN_LEXICON, BUILTIN_EMOTICONS, BUILTIN_WORD_LISTS)
                    .expect("embedded lexicon resources are well-formed"),
            )
        }))
    }

    fn parse(
        lexicon: &str,
        lexicon_resource: &str,
        emoticons: &str,
        emoticon_resource: &str,
        word_lists: &str,
        word_lists_resource: &str,
    ) -> Result<Self, LexiconError> {
        let word_entries = parse_lexicon(lexicon, lexicon_resource)?;
        let emoticon_entries = parse_lexicon(emoticons, emoticon_resource)?;

        let properties = parse_properties(word_lists);
        let negations = word_list(&properties, "negations", word_lists_resource)?;
        let intensity_modifiers =
            word_list(&properties, "intensity.modifiers", word_lists_resource)?;

        let mut words = HashMap::with_capacity(word_entries.len());
        for entry in word_entries {
            words.insert(entry.word.clone(), entry);
        }

        tracing::debug!(
            words = words.len(),
            emoticons = emoticon_entries.len(),
            negations = negations.len(),
            intensity_modifiers = intensity_modifiers.len(),
            "lexicon loaded"
        );

        Ok(Self {
            words,
            emoticons: emoticon_entries,
            negations,
            intensity_modifiers,
        })
    }

    /// Look up a plain word. Exact match only; returns an independent copy.
    pub fn lookup_word(&self, word: &str) -> Option<AffectEntry> {
        self.words.get(word).cloned()
    }

    /// Look up an emoticon token.
    ///
    /// Tries an exact pattern match first, then a prefix-containment match
    /// (the token starting with a stored pattern); the prefix case marks
    /// `starts_with_emoticon_prefix` on the returned copy.
    pub fn lookup_emoticon(&self, token: &str) -> Option<AffectEntry> {
        if let Some(exact) = self.emoticons.iter().find(|e| e.word == token) {
            return Some(exact.clone());
        }

        self.emoticons
            .iter()
            .find(|e| tokenize::starts_with_prefix(token, &e.word))
            .map(AffectEntry::as_prefix_match)
    }

    /// All emoticon entries whose pattern occurs anywhere in the sentence.
    pub fn find_emoticons_in(&self, sentence: &str) -> Vec<AffectEntry> {
        self.emoticons
            .iter()
            .filter(|e| sentence.contains(&e.word))
            .map(AffectEntry::as_prefix_match)
            .collect()
    }

    /// True if the word is in the negation list. Exact membership.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// True if the word is in the intensity-modifier list. Exact membership.
    pub fn is_intensity_modifier(&self, word: &str) -> bool {
        self.intensity_modifiers.contains(word)
    }
}

fn read_resource(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        resource: path.display().to_string(),
        source,
    })
}

fn parse_lexicon(source: &str, resource: &str) -> Result<Vec<AffectEntry>, LexiconError> {
    let mut entries = Vec::new();
    for (index, line) in source.lines().enumerate() {
        entries.push(parse_line(line, resource, index + 1)?);
    }

    Ok(entries)
}

fn parse_line(line: &str, resource: &str, line_no: usize) -> Result<AffectEntry, LexiconError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 8 {
        return Err(LexiconError::FieldCount {
            resource: resource.to_string(),
            line: line_no,
            found: fields.len(),
        });
    }

    let mut weights = [0.0; 7];
    for (slot, field) in weights.iter_mut().zip(&fields[1..]) {
        *slot = field
            .parse::<f64>()
            .map_err(|source| LexiconError::InvalidWeight {
                resource: resource.to_string(),
                line: line_no,
                value: (*field).to_string(),
                source,
            })?;
    }

    Ok(AffectEntry::new(fields[0], weights))
}

/// Minimal `key=value` parsing; `#` and `!` lines are comments.
fn parse_properties(source: &str) -> HashMap<&str, &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('!'))
        .filter_map(|l| l.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect()
}

fn word_list(
    properties: &HashMap<&str, &str>,
    key: &str,
    resource: &str,
) -> Result<HashSet<String>, LexiconError> {
    let raw = properties
        .get(key)
        .copied()
        .ok_or_else(|| LexiconError::MissingWordList {
            resource: resource.to_string(),
            key: key.to_string(),
        })?;

    Ok(tokenize::split_on(raw, ", ")
        .into_iter()
        .map(str::to_string)
        .collect())
}
