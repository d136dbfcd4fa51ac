use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("analyzer error: {0}")]
    Analyzer(String),

    #[error("compound polarity {0} is outside [-1, 1]")]
    InvalidCompound(f64),
}
