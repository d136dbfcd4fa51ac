/// Output of a [`crate::PolarityAnalyzer`].
///
/// `neg`, `neu` and `pos` are proportions of the text's sentiment mass and
/// sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Normalized overall polarity in `[-1.0, 1.0]`.
    pub compound: f64,
}

impl Polarity {
    /// Polarity of text with no sentiment signal at all.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// Coarse bucket for a normalized `[1.0, 5.0]` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// `>= 3.5` is positive, `>= 2.5` neutral, anything lower negative.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 3.5 {
            SentimentLabel::Positive
        } else if score >= 2.5 {
            SentimentLabel::Neutral
        } else {
            SentimentLabel::Negative
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Positive => write!(f, "positive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds() {
        assert_eq!(SentimentLabel::from_score(5.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(3.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(3.49), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(3.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(2.5), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(2.49), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Negative);
    }

    #[test]
    fn label_displays_lowercase() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "neutral");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn neutral_polarity_has_zero_compound() {
        let p = Polarity::neutral();
        assert_eq!(p.compound, 0.0);
        assert!((p.neg + p.neu + p.pos - 1.0).abs() < f64::EPSILON);
    }
}
