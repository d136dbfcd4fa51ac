//! Shared configuration for the driver sentiment model server.

pub mod app_config;
pub mod config;
pub mod lexicon_file;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use lexicon_file::{load_lexicon_file, LexiconEntry, LexiconFile, MAX_VALENCE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[from] serde_yaml::Error),

    #[error("invalid lexicon entry \"{word}\": {reason}")]
    InvalidLexiconEntry { word: String, reason: String },
}
