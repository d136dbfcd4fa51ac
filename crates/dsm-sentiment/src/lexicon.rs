//! Valence-lexicon polarity analyzer tuned for rider feedback about drivers.

use std::collections::HashMap;

use crate::analyzer::PolarityAnalyzer;
use crate::error::SentimentError;
use crate::types::Polarity;

/// Built-in word valences on a `[-4.0, 4.0]` scale.
///
/// Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("careful", 1.3),
    ("clean", 1.7),
    ("comfortable", 1.5),
    ("courteous", 2.3),
    ("delightful", 2.9),
    ("efficient", 1.7),
    ("enjoyed", 2.3),
    ("excellent", 3.2),
    ("fantastic", 2.6),
    ("fast", 1.2),
    ("fine", 0.8),
    ("friendly", 2.2),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("kind", 2.4),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("polite", 2.0),
    ("professional", 1.9),
    ("prompt", 1.6),
    ("punctual", 1.8),
    ("quick", 1.1),
    ("recommend", 1.5),
    ("reliable", 1.9),
    ("respectful", 2.0),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smooth", 1.6),
    ("superb", 3.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("wonderful", 2.7),
    // Negative signals
    ("aggressive", -1.9),
    ("angry", -2.3),
    ("annoying", -1.8),
    ("awful", -2.0),
    ("bad", -2.5),
    ("careless", -1.8),
    ("dangerous", -2.1),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.9),
    ("dislike", -1.6),
    ("filthy", -2.6),
    ("frustrated", -2.0),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("impolite", -1.9),
    ("lost", -1.3),
    ("late", -1.2),
    ("mean", -1.4),
    ("messy", -1.5),
    ("nightmare", -2.8),
    ("poor", -2.1),
    ("reckless", -2.3),
    ("rude", -2.0),
    ("scary", -2.2),
    ("slow", -1.0),
    ("smelly", -1.8),
    ("terrible", -2.5),
    ("unprofessional", -2.0),
    ("unsafe", -2.3),
    ("upset", -1.6),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Words that strengthen the sentiment word that follows them.
const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "especially",
    "exceptionally",
    "extremely",
    "highly",
    "incredibly",
    "really",
    "so",
    "super",
    "totally",
    "truly",
    "very",
];

/// Words that soften the sentiment word that follows them.
const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "little", "marginally", "partly", "slightly",
    "somewhat", "sorta",
];

const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "dont", "didnt", "doesnt", "hardly", "isnt", "lack", "neither",
    "never", "no", "nobody", "none", "nor", "not", "nothing", "nowhere", "wasnt", "without",
    "wont", "wouldnt",
];

const BOOST_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant: approximates the max expected raw sum.
const ALPHA: f64 = 15.0;
/// How far back boosters and negations reach.
const LOOKBACK: usize = 3;

#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    valences: HashMap<String, f64>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    /// Analyzer over the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        let valences = LEXICON
            .iter()
            .map(|&(word, valence)| (word.to_string(), valence))
            .collect();
        Self { valences }
    }

    /// Built-in lexicon plus `overrides`. An override replaces a built-in
    /// entry for the same (lowercased) word.
    #[must_use]
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut analyzer = Self::new();
        let mut applied = 0_usize;
        for (word, valence) in overrides {
            analyzer.valences.insert(word.to_lowercase(), valence);
            applied += 1;
        }
        tracing::debug!(
            applied,
            total = analyzer.valences.len(),
            "lexicon overrides applied"
        );
        analyzer
    }

    /// Number of words the analyzer knows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    fn valence_of(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied().filter(|v| *v != 0.0)
    }

    /// Per-token valences after boosters, caps emphasis, negation and
    /// contrastive "but" weighting. Non-lexicon tokens contribute `0.0`.
    fn token_valences(&self, tokens: &[Token<'_>], caps_differential: bool) -> Vec<f64> {
        let mut valences = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut v) = self.valence_of(&token.lower) else {
                valences.push(0.0);
                continue;
            };

            if caps_differential && token.is_shouted() {
                v += CAPS_INCREMENT.copysign(v);
            }

            let window = &tokens[i.saturating_sub(LOOKBACK)..i];
            for (distance, prev) in window.iter().rev().enumerate() {
                let decay = match distance {
                    0 => 1.0,
                    1 => 0.95,
                    _ => 0.9,
                };
                let lower = prev.lower.as_str();
                if BOOSTERS.contains(&lower) {
                    v += (BOOST_INCREMENT * decay).copysign(v);
                } else if DAMPENERS.contains(&lower) {
                    v -= (BOOST_INCREMENT * decay).copysign(v);
                }
            }

            if window.iter().any(Token::is_negation) {
                v *= NEGATION_SCALAR;
            }

            valences.push(v);
        }

        if let Some(but_at) = tokens.iter().position(|t| t.lower == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < but_at {
                    *v *= 0.5;
                } else if i > but_at {
                    *v *= 1.5;
                }
            }
        }

        valences
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> Result<Polarity, SentimentError> {
        let tokens: Vec<Token<'_>> = text
            .split_whitespace()
            .filter_map(Token::parse)
            .collect();
        if tokens.is_empty() {
            return Ok(Polarity::neutral());
        }

        let caps_differential = is_caps_differential(&tokens);
        let valences = self.token_valences(&tokens, caps_differential);

        let emphasis = exclamation_emphasis(text);
        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        Ok(Polarity {
            compound: normalize(sum),
            ..proportions(&valences, emphasis)
        })
    }
}

/// A whitespace-separated word with surrounding punctuation removed.
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> Token<'a> {
    fn parse(word: &'a str) -> Option<Self> {
        let raw = word.trim_matches(|c: char| !c.is_alphanumeric());
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            lower: raw.to_lowercase(),
        })
    }

    fn is_negation(&self) -> bool {
        let folded: String = self.lower.chars().filter(|c| !is_apostrophe(*c)).collect();
        NEGATIONS.contains(&folded.as_str())
            || self.lower.ends_with("n't")
            || self.lower.ends_with("n\u{2019}t")
    }

    /// All cased characters are uppercase, and there are at least two of them.
    fn is_shouted(&self) -> bool {
        let mut cased = self.raw.chars().filter(|c| c.is_alphabetic());
        cased.clone().count() > 1 && cased.all(char::is_uppercase)
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// True when some, but not all, tokens are shouted.
fn is_caps_differential(tokens: &[Token<'_>]) -> bool {
    let shouted = tokens.iter().filter(|t| t.is_shouted()).count();
    shouted > 0 && shouted < tokens.len()
}

fn exclamation_emphasis(text: &str) -> f64 {
    let count = text.chars().filter(|&c| c == '!').count().min(MAX_EXCLAMATIONS);
    // count <= 4, so the conversion is exact
    f64::from(u32::try_from(count).unwrap_or(0)) * EXCLAMATION_INCREMENT
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// `neg`/`neu`/`pos` shares of the sentiment mass. Punctuation emphasis is
/// credited to whichever side dominates.
fn proportions(valences: &[f64], emphasis: f64) -> Polarity {
    let mut pos = 0.0;
    let mut neg = 0.0;
    let mut neu = 0.0;
    for &v in valences {
        if v > 0.0 {
            pos += v + 1.0;
        } else if v < 0.0 {
            neg += v - 1.0;
        } else {
            neu += 1.0;
        }
    }

    if pos > neg.abs() {
        pos += emphasis;
    } else if pos < neg.abs() {
        neg -= emphasis;
    }

    let total = pos + neg.abs() + neu;
    if total <= 0.0 {
        return Polarity::neutral();
    }

    Polarity {
        neg: neg.abs() / total,
        neu: neu / total,
        pos: pos / total,
        compound: 0.0,
    }
}
