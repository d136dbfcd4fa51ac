use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Largest absolute valence a lexicon word may carry.
pub const MAX_VALENCE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub valence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub words: Vec<LexiconEntry>,
}

impl LexiconFile {
    /// Entries as lowercase `(word, valence)` pairs, ready to merge into an analyzer.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, f64)> {
        self.words
            .into_iter()
            .map(|e| (e.word.trim().to_lowercase(), e.valence))
            .collect()
    }
}

/// Load and validate a lexicon override file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon_file(path: &Path) -> Result<LexiconFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: LexiconFile = serde_yaml::from_str(&content)?;
    validate_lexicon(&file)?;

    Ok(file)
}

fn validate_lexicon(file: &LexiconFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in &file.words {
        let word = entry.word.trim().to_lowercase();
        let reject = |reason: String| ConfigError::InvalidLexiconEntry {
            word: entry.word.clone(),
            reason,
        };

        if word.is_empty() {
            return Err(reject("word must be non-empty".to_string()));
        }
        if word.split_whitespace().count() > 1 {
            return Err(reject("word must not contain whitespace".to_string()));
        }
        if word != word.trim_matches(|c: char| !c.is_alphanumeric()) {
            return Err(reject(
                "word must start and end with a letter or digit".to_string(),
            ));
        }
        if !entry.valence.is_finite() || entry.valence.abs() > MAX_VALENCE {
            return Err(reject(format!(
                "valence {} must be within [-{MAX_VALENCE}, {MAX_VALENCE}]",
                entry.valence
            )));
        }
        if !seen.insert(word) {
            return Err(reject("duplicate word".to_string()));
        }
    }

    Ok(())
}
