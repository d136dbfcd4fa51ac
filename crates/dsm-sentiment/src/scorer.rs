//! Rescales compound polarity onto the 1–5 driver rating scale.

use crate::analyzer::PolarityAnalyzer;
use crate::error::SentimentError;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;
/// Score for blank text: the midpoint of the rating scale.
pub const NEUTRAL_SCORE: f64 = 3.0;

/// Map a compound polarity in `[-1.0, 1.0]` onto `[1.0, 5.0]`, rounded to
/// two decimal places (half away from zero).
///
/// `-1.0 → 1.0`, `0.0 → 3.0`, `1.0 → 5.0`.
#[must_use]
pub fn normalize_compound(compound: f64) -> f64 {
    let normalized = ((compound + 1.0) / 2.0) * 4.0 + 1.0;
    round2(normalized).clamp(MIN_SCORE, MAX_SCORE)
}

/// Score one text.
///
/// Blank or whitespace-only text returns [`NEUTRAL_SCORE`] without consulting
/// the analyzer. Otherwise the raw, untrimmed text is analyzed.
///
/// # Errors
///
/// Propagates analyzer failures, and returns [`SentimentError::InvalidCompound`]
/// when the analyzer reports a compound that is not finite or not in `[-1, 1]`.
pub fn score_text(analyzer: &dyn PolarityAnalyzer, text: &str) -> Result<f64, SentimentError> {
    if text.trim().is_empty() {
        return Ok(NEUTRAL_SCORE);
    }

    let compound = analyzer.polarity(text)?.compound;
    if !compound.is_finite() || !(-1.0..=1.0).contains(&compound) {
        return Err(SentimentError::InvalidCompound(compound));
    }

    Ok(normalize_compound(compound))
}

/// Score every text in order. Stops at the first failure; there are no
/// partial results.
///
/// # Errors
///
/// Returns the first error produced by [`score_text`].
pub fn score_batch<S: AsRef<str>>(
    analyzer: &dyn PolarityAnalyzer,
    texts: &[S],
) -> Result<Vec<f64>, SentimentError> {
    texts
        .iter()
        .map(|text| score_text(analyzer, text.as_ref()))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use proptest::prelude::*;

    use super::*;
    use crate::lexicon::LexiconAnalyzer;
    use crate::types::Polarity;

    /// Analyzer that reports the same compound for every text.
    struct FixedCompound(f64);

    impl PolarityAnalyzer for FixedCompound {
        fn polarity(&self, _text: &str) -> Result<Polarity, SentimentError> {
            Ok(Polarity {
                compound: self.0,
                ..Polarity::neutral()
            })
        }
    }

    /// Analyzer that fails on any text containing `boom` and counts calls.
    #[derive(Default)]
    struct Exploding {
        calls: AtomicUsize,
    }

    impl PolarityAnalyzer for Exploding {
        fn polarity(&self, text: &str) -> Result<Polarity, SentimentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if text.contains("boom") {
                return Err(SentimentError::Analyzer("lexicon exploded".to_string()));
            }
            Ok(Polarity::neutral())
        }
    }

    #[test]
    fn empty_and_whitespace_text_is_neutral() {
        let analyzer = Exploding::default();
        assert_eq!(score_text(&analyzer, "").unwrap(), 3.0);
        assert_eq!(score_text(&analyzer, "   ").unwrap(), 3.0);
        assert_eq!(score_text(&analyzer, "\t\n ").unwrap(), 3.0);
        assert_eq!(
            analyzer.calls.load(Ordering::SeqCst),
            0,
            "blank text must not reach the analyzer"
        );
    }

    #[test]
    fn extreme_compounds_map_to_scale_bounds() {
        assert_eq!(score_text(&FixedCompound(1.0), "x").unwrap(), 5.0);
        assert_eq!(score_text(&FixedCompound(-1.0), "x").unwrap(), 1.0);
        assert_eq!(score_text(&FixedCompound(0.0), "x").unwrap(), 3.0);
    }

    #[test]
    fn normalize_rounds_to_two_places() {
        // 0.6249 -> 4.2498 -> 4.25
        assert_eq!(normalize_compound(0.6249), 4.25);
        // -0.5 -> 2.0 exactly
        assert_eq!(normalize_compound(-0.5), 2.0);
        // 0.123 -> 3.246 -> 3.25
        assert_eq!(normalize_compound(0.123), 3.25);
    }

    #[test]
    fn out_of_range_compound_is_rejected() {
        let err = score_text(&FixedCompound(1.5), "x").unwrap_err();
        assert!(matches!(err, SentimentError::InvalidCompound(c) if c == 1.5));
        assert!(matches!(
            score_text(&FixedCompound(f64::NAN), "x"),
            Err(SentimentError::InvalidCompound(_))
        ));
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let analyzer = LexiconAnalyzer::new();
        let texts = ["great service", "terrible experience", ""];
        let scores = score_batch(&analyzer, &texts).unwrap();
        assert_eq!(scores.len(), texts.len());
        assert!(scores[0] > 3.0, "got {scores:?}");
        assert!(scores[1] < 3.0, "got {scores:?}");
        assert_eq!(scores[2], 3.0);
    }

    #[test]
    fn batch_is_idempotent() {
        let analyzer = LexiconAnalyzer::new();
        let texts = vec![
            "Driver was friendly but a little late".to_string(),
            "worst ride ever!!!".to_string(),
        ];
        assert_eq!(
            score_batch(&analyzer, texts.as_slice()).unwrap(),
            score_batch(&analyzer, texts.as_slice()).unwrap()
        );
    }

    #[test]
    fn batch_fails_fast_on_first_error() {
        let analyzer = Exploding::default();
        let err = score_batch(&analyzer, &["fine", "boom", "never scored"]).unwrap_err();
        assert!(matches!(err, SentimentError::Analyzer(_)));
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_batch_scores_to_empty_vec() {
        let texts: [&str; 0] = [];
        assert!(score_batch(&FixedCompound(0.0), &texts).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn lexicon_scores_stay_within_scale(text in ".{0,200}") {
            let analyzer = LexiconAnalyzer::new();
            let score = score_text(&analyzer, &text).unwrap();
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }

        #[test]
        fn any_valid_compound_stays_within_scale(compound in -1.0f64..=1.0) {
            let score = normalize_compound(compound);
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }

        #[test]
        fn whitespace_only_is_always_neutral(text in "[ \t\r\n]{0,32}") {
            prop_assert_eq!(score_text(&FixedCompound(1.0), &text).unwrap(), NEUTRAL_SCORE);
        }
    }
}
