//! # empath-core
//!
//! Core data model for Empath - a lexicon-driven textual affect sensing
//! library. This crate defines what an analysis *produces*: ranked Ekman
//! emotion categories with weights, an overall valence, and the errors a
//! lexicon load can raise. The inference itself lives in `empath-infer`.
//!
//! ## Core Types
//!
//! - [`Emotion`] - the six Ekman categories plus the neutral fallback
//! - [`EmotionEntry`] - one `(emotion, weight)` pair in a ranked result
//! - [`EmotionalState`] - the complete ranked output for one text
//! - [`LexiconError`] - fatal lexicon-load failures
//!
//! ## Example
//!
//! ```rust
//! use empath_core::{Emotion, EmotionEntry, EmotionalState};
//!
//! let state = EmotionalState::new(
//!     "what a day",
//!     vec![EmotionEntry::new(Emotion::Happiness, 0.72)],
//!     0.72,
//!     1,
//! );
//!
//! assert_eq!(state.strongest_emotion().emotion, Emotion::Happiness);
//! assert_eq!(state.valence(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod emotion;
mod error;
mod state;
pub mod telemetry;

pub use emotion::{Emotion, EmotionEntry};
pub use error::LexiconError;
pub use state::EmotionalState;
