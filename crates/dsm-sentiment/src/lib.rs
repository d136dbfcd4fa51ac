//! Sentiment scoring for driver feedback.
//!
//! A [`PolarityAnalyzer`] turns text into a compound polarity in `[-1.0, 1.0]`;
//! the scorer rescales that onto the `[1.0, 5.0]` rating scale used by the
//! downstream driver rating pipeline. [`LexiconAnalyzer`] is the built-in
//! valence-lexicon analyzer the server runs with.

pub mod analyzer;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod types;

pub use analyzer::PolarityAnalyzer;
pub use error::SentimentError;
pub use lexicon::LexiconAnalyzer;
pub use scorer::{
    normalize_compound, score_batch, score_text, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE,
};
pub use types::{Polarity, SentimentLabel};
