//! End-to-end tests for the public `feel` surface.

use empath_infer::{feel, Emotion, Empath, Lexicon};

#[test]
fn builtin_engine_end_to_end() {
    let empath = Empath::builtin();

    let state = empath.feel("I love you so very much");
    assert_eq!(state.strongest_emotion().emotion, Emotion::Happiness);
    assert_eq!(state.valence(), 1);
    assert!(state.general_weight() > 0.0);

    let state = empath.feel("This is disgusting and it makes me furious!");
    assert!(state.disgust_weight() > 0.0);
    assert!(state.anger_weight() > 0.0);
    assert_eq!(state.valence(), -1);
}

#[test]
fn free_function_matches_engine() {
    let text = "what a wonderful surprise?!";
    let via_fn = feel(text);
    let via_engine = Empath::builtin().feel(text);

    assert_eq!(via_fn.valence(), via_engine.valence());
    assert_eq!(via_fn.emotions().len(), via_engine.emotions().len());
}

#[test]
fn custom_lexicon_engine() {
    let lexicon = Lexicon::from_strs(
        "blip 0.9 0.0 0.0 0.0 0.95 0.0 0.0",
        ":q 0.5 0.6 0.0 0.0 0.0 0.0 0.0",
        "negations=not\nintensity.modifiers=very",
    )
    .unwrap();
    let empath = Empath::new(lexicon);

    let state = empath.feel("blip!");
    assert_eq!(state.strongest_emotion().emotion, Emotion::Fear);
    assert_eq!(state.valence(), -1);

    // Words the custom lexicon does not know fall back to neutral.
    let state = empath.feel("love");
    assert_eq!(state.strongest_emotion().emotion, Emotion::Neutral);
}

#[test]
fn ranking_is_strict_and_complete() {
    let state = Empath::builtin().feel("happy and sad and scared and angry");

    let emotions: Vec<Emotion> = state.emotions().iter().map(|e| e.emotion).collect();
    assert!(emotions.contains(&Emotion::Happiness));
    assert!(emotions.contains(&Emotion::Sadness));
    assert!(emotions.contains(&Emotion::Fear));
    assert!(emotions.contains(&Emotion::Anger));
    assert!(!emotions.contains(&Emotion::Neutral));

    for pair in state.emotions().windows(2) {
        assert!(pair[0].weight >= pair[1].weight, "ranking must be descending");
    }
}

#[test]
fn conversation_history_chain() {
    let empath = Empath::builtin();

    let first = empath.feel("I am happy");
    let mut second = empath.feel("I am not happy anymore");
    second.set_previous(first);

    assert_eq!(second.valence(), -1);
    assert_eq!(second.previous().unwrap().valence(), 1);
}

#[test]
fn states_serialize() {
    let state = Empath::builtin().feel("so happy :))");
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("happiness"));

    let parsed: empath_infer::EmotionalState = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.valence(), state.valence());
}

#[test]
fn concurrent_feel_calls_share_one_lexicon() {
    let empath = Empath::builtin();
    let expected = empath.feel("VERY happy!!").happiness_weight();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let empath = empath.clone();
            std::thread::spawn(move || empath.feel("VERY happy!!").happiness_weight())
        })
        .collect();

    for handle in handles {
        // Scaled working copies must never leak between calls.
        assert_eq!(handle.join().unwrap(), expected);
    }
}
