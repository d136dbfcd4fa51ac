use crate::error::SentimentError;
use crate::types::Polarity;

/// A sentiment-polarity capability.
///
/// Implementations are shared across request handlers for the life of the
/// process, so they must be read-only after construction.
pub trait PolarityAnalyzer: Send + Sync {
    /// Polarity of `text`. The scorer only consumes [`Polarity::compound`],
    /// which must lie in `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Analyzer`] if the text cannot be analyzed.
    fn polarity(&self, text: &str) -> Result<Polarity, SentimentError>;
}
