//! Surface-level heuristic rules.
//!
//! Six stateless rules map surface features of the text (punctuation,
//! casing, emoticon repetition, preceding-word identity) onto multiplicative
//! coefficients or flags. Coefficients are always >= 1.0 and compose
//! multiplicatively; none of the rules is optional.

use crate::lexicon::{AffectEntry, Lexicon};

/// Rule 1: exclamation coefficient for a sentence.
///
/// `1.0 + 0.2 x count('!')` - more exclamation marks intensify every match
/// in the sentence.
pub fn exclamation_coef(sentence: &str) -> f64 {
    1.0 + 0.2 * count_char(sentence, '!') as f64
}

/// Rule 2: true when the sentence combines `?` and `!` (`?!` or `!?`).
///
/// The engine injects a synthetic surprise-only sample when this holds.
pub fn has_surprise_combo(sentence: &str) -> bool {
    sentence.contains("?!") || sentence.contains("!?")
}

/// Rule 3: emoticon repetition coefficient.
///
/// For an entry matched via prefix containment, repeated terminal pattern
/// characters intensify the match: `1.0 + 0.2 x count(last-char-of-pattern
/// in token)` (e.g. the extra `)` in `:))))`). Exact matches get 1.0.
pub fn emoticon_repetition_coef(token: &str, entry: &AffectEntry) -> f64 {
    if !entry.starts_with_emoticon_prefix() {
        return 1.0;
    }

    match entry.word().chars().last() {
        Some(last) => 1.0 + 0.2 * count_char(token, last) as f64,
        None => 1.0,
    }
}

/// Product of repetition coefficients over every emoticon contained in the
/// sentence.
pub fn emoticon_coef_for_sentence(sentence: &str, lexicon: &Lexicon) -> f64 {
    lexicon
        .find_emoticons_in(sentence)
        .iter()
        .map(|e| emoticon_repetition_coef(sentence, e))
        .product()
}

/// Rule 5: caps-lock coefficient, computed on the original-case token.
///
/// 1.5 when no lowercase letter is present, else 1.0.
pub fn caps_lock_coef(word: &str) -> f64 {
    if word.chars().any(char::is_lowercase) {
        1.0
    } else {
        1.5
    }
}

/// Rule 6: preceding-word modifier coefficient.
///
/// 1.5 when the (case-folded) previous word is an intensity modifier,
/// else 1.0. Membership is the lexicon's concern; this maps it to a weight.
pub fn modifier_coef(previous_is_modifier: bool) -> f64 {
    if previous_is_modifier {
        1.5
    } else {
        1.0
    }
}

fn count_char(text: &str, needle: char) -> usize {
    text.chars().filter(|&c| c == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Lexicon {
        Lexicon::from_strs(
            "happy 0.8 0.9 0.0 0.0 0.0 0.0 0.0",
            ":) 0.7 0.8 0.0 0.0 0.0 0.0 0.0\n:( 0.6 0.0 0.7 0.0 0.0 0.0 0.0",
            "negations=not\nintensity.modifiers=very",
        )
        .unwrap()
    }

    #[test]
    fn test_exclamation_coef_counts_marks() {
        assert_eq!(exclamation_coef("calm sentence."), 1.0);
        assert!((exclamation_coef("wow!") - 1.2).abs() < 1e-12);
        assert!((exclamation_coef("wow!!!") - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_surprise_combo() {
        assert!(has_surprise_combo("really?!"));
        assert!(has_surprise_combo("really!?"));
        assert!(!has_surprise_combo("really? yes!"));
    }

    #[test]
    fn test_emoticon_repetition_rewards_terminal_chars() {
        let lex = fixture();

        let prefix = lex.lookup_emoticon(":))))").unwrap();
        // Pattern ":)" ends in ')', which occurs four times in the token.
        assert!((emoticon_repetition_coef(":))))", &prefix) - 1.8).abs() < 1e-12);

        let exact = lex.lookup_emoticon(":)").unwrap();
        assert_eq!(emoticon_repetition_coef(":)", &exact), 1.0);
    }

    #[test]
    fn test_emoticon_coef_for_sentence() {
        let lex = fixture();
        // ":)" occurs with two ')' in the sentence scan.
        let coef = emoticon_coef_for_sentence("fine :))", &lex);
        assert!((coef - 1.4).abs() < 1e-12);

        assert_eq!(emoticon_coef_for_sentence("no emoticons", &lex), 1.0);
    }

    #[test]
    fn test_caps_lock_coef() {
        assert_eq!(caps_lock_coef("HAPPY"), 1.5);
        assert_eq!(caps_lock_coef("Happy"), 1.0);
        assert_eq!(caps_lock_coef("happy"), 1.0);
        // Non-letters do not disqualify an all-caps token.
        assert_eq!(caps_lock_coef("HAPPY!"), 1.5);
    }

    #[test]
    fn test_modifier_coef() {
        assert_eq!(modifier_coef(true), 1.5);
        assert_eq!(modifier_coef(false), 1.0);
    }
}
