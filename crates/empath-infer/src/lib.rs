//! # empath-infer
//!
//! Lexicon-based textual affect sensing: no statistical model, no training,
//! just a static lexicon and six surface-level heuristic rules.
//!
//! The pipeline: text is split into sentences and words, each token is
//! looked up in the word and emoticon lexicons, matches are scaled by
//! heuristic coefficients (exclamation marks, caps lock, intensity
//! modifiers, emoticon repetition), negation scopes flip polarity, and the
//! resulting samples are aggregated into a ranked
//! [`EmotionalState`](empath_core::EmotionalState).
//!
//! ## Example
//!
//! ```rust
//! use empath_core::Emotion;
//! use empath_infer::Empath;
//!
//! let empath = Empath::builtin();
//! let state = empath.feel("I love you so very much");
//!
//! assert_eq!(state.strongest_emotion().emotion, Emotion::Happiness);
//! assert_eq!(state.valence(), 1);
//! ```
//!
//! Engines over a custom lexicon are built with [`Lexicon::load`] or
//! [`Lexicon::from_strs`] and [`Empath::new`]; the load is the only
//! operation that can fail.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod engine;
pub mod heuristics;
mod lexicon;
mod sample;
pub mod tokenize;

pub use empath_core::{Emotion, EmotionEntry, EmotionalState, LexiconError};
pub use engine::{feel, Empath};
pub use lexicon::{AffectEntry, Lexicon};
