//! Text segmentation.
//!
//! Sentence and word splitting follow the Unicode text segmentation rules
//! (UAX #29) rather than naive whitespace splitting, so punctuation,
//! abbreviations, and non-ASCII boundaries behave the way a standard
//! break iterator would. None of these operations can fail; empty input
//! yields empty output.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into sentences at Unicode sentence boundaries.
///
/// Segments cover the whole input, so trailing whitespace stays attached
/// to the sentence that precedes it.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split_sentence_bounds().collect()
}

/// Split a sentence into word-boundary segments.
///
/// Returns *all* segments, punctuation included. Callers that track a
/// previous-word cursor rely on punctuation segments advancing it.
pub fn words(text: &str) -> Vec<&str> {
    text.split_word_bounds().collect()
}

/// Split text on a literal delimiter, dropping empty pieces.
///
/// This is a coarse pre-split (e.g. on `" "`) applied before word-boundary
/// segmentation; it is not linguistic word splitting.
pub fn split_on<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    text.split(delimiter).filter(|s| !s.is_empty()).collect()
}

/// True iff `container` is strictly longer than `prefix` and begins with it.
///
/// Used for emoticon-prefix matching, e.g. the pattern `:)` inside `:)))`.
/// An exact match is not a prefix match.
pub fn starts_with_prefix(container: &str, prefix: &str) -> bool {
    container.len() > prefix.len() && container.starts_with(prefix)
}
