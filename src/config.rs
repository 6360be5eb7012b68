use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Which sentiment scoring backend to prefer at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleBackend {
    /// Local ONNX model (default) — no API key needed, no rate limits.
    /// Falls back to Mock for the process lifetime if loading fails.
    Bert,
    /// Lexicon heuristic — never touches a model. Forced via PALATE_ORACLE=mock.
    Mock,
}

/// Review filter tuning. The defaults match the platform caps the
/// scrapers were written against.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Minimum trimmed review length in characters (inclusive).
    pub min_chars: usize,
    /// Maximum trimmed review length in characters (inclusive).
    pub max_chars: usize,
    /// Reject a review when one token's frequency exceeds this fraction
    /// of total tokens. Exactly at the threshold is kept.
    pub max_token_share: f64,
    /// Case-insensitive regex patterns for spam/advertorial text.
    pub spam_patterns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_chars: 20,
            max_chars: 5000,
            max_token_share: 0.30,
            spam_patterns: vec![
                r"https?://".to_string(),
                r"click here".to_string(),
                r"buy now".to_string(),
                r"visit (my|our) (site|website)".to_string(),
                r"\b(cheap|free) (download|shipping)\b".to_string(),
            ],
        }
    }
}

/// Extractive summarizer tuning.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Cap on how many filtered reviews feed the scoring stages.
    pub max_reviews: usize,
    /// Cap on snippets taken from a single review, for broad coverage.
    pub per_review_snippets: usize,
    /// Total snippet budget for the whole batch.
    pub max_snippets: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_reviews: 100,
            per_review_snippets: 2,
            max_snippets: 8,
        }
    }
}

/// Convex-combination weights for the compatibility score.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub sentiment_weight: f64,
    pub theme_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sentiment_weight: 0.5,
            theme_weight: 0.5,
        }
    }
}

/// Recommendation tier cut-offs. Must be strictly ordered.
#[derive(Debug, Clone, Copy)]
pub struct TierThresholds {
    pub highly_likely: f64,
    pub worth_trying: f64,
    pub proceed_caution: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            highly_likely: 0.8,
            worth_trying: 0.6,
            proceed_caution: 0.4,
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a documented default; validation runs once at process start
/// and configuration problems never surface at request time.
#[derive(Debug, Clone)]
pub struct Config {
    pub filter: FilterConfig,
    pub summary: SummaryConfig,
    pub weights: ScoringWeights,
    pub thresholds: TierThresholds,
    /// Fewer surviving reviews than this fails the request with
    /// InsufficientReviews.
    pub min_reviews: usize,
    /// Which sentiment backend to attempt at startup.
    pub oracle_backend: OracleBackend,
    /// HuggingFace model id reported in AnalysisResult.evaluation.
    pub model_name: String,
    /// Directory containing the ONNX model files.
    pub model_dir: PathBuf,
    /// How many review texts go into one inference pass.
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            summary: SummaryConfig::default(),
            weights: ScoringWeights::default(),
            thresholds: TierThresholds::default(),
            min_reviews: 1,
            oracle_backend: OracleBackend::Bert,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_dir: crate::sentiment::download::default_model_dir(),
            batch_size: 16,
        }
    }
}

/// 1-to-5-star multilingual sentiment classifier.
pub const DEFAULT_MODEL_NAME: &str = "nlptown/bert-base-multilingual-uncased-sentiment";

impl Config {
    /// Load configuration from environment variables, falling back to
    /// the documented defaults for anything unset or unparsable.
    pub fn load() -> Self {
        let oracle_backend = match env::var("PALATE_ORACLE").as_deref() {
            Ok("mock") => OracleBackend::Mock,
            // "bert" or unset both default to the model-backed oracle
            _ => OracleBackend::Bert,
        };

        let model_dir = env::var("PALATE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::sentiment::download::default_model_dir());

        let defaults = Config::default();

        Self {
            filter: FilterConfig {
                min_chars: env_parse("PALATE_MIN_REVIEW_CHARS", defaults.filter.min_chars),
                max_chars: env_parse("PALATE_MAX_REVIEW_CHARS", defaults.filter.max_chars),
                max_token_share: env_parse(
                    "PALATE_MAX_TOKEN_SHARE",
                    defaults.filter.max_token_share,
                ),
                spam_patterns: defaults.filter.spam_patterns,
            },
            summary: SummaryConfig {
                max_reviews: env_parse("PALATE_MAX_REVIEWS", defaults.summary.max_reviews),
                per_review_snippets: defaults.summary.per_review_snippets,
                max_snippets: defaults.summary.max_snippets,
            },
            weights: ScoringWeights {
                sentiment_weight: env_parse(
                    "PALATE_SENTIMENT_WEIGHT",
                    defaults.weights.sentiment_weight,
                ),
                theme_weight: env_parse("PALATE_THEME_WEIGHT", defaults.weights.theme_weight),
            },
            thresholds: TierThresholds {
                highly_likely: env_parse(
                    "HIGHLY_LIKELY_THRESHOLD",
                    defaults.thresholds.highly_likely,
                ),
                worth_trying: env_parse("WORTH_TRYING_THRESHOLD", defaults.thresholds.worth_trying),
                proceed_caution: env_parse(
                    "PROCEED_CAUTION_THRESHOLD",
                    defaults.thresholds.proceed_caution,
                ),
            },
            min_reviews: env_parse("PALATE_MIN_REVIEWS", defaults.min_reviews),
            oracle_backend,
            model_name: env::var("MODEL_NAME").unwrap_or(defaults.model_name),
            model_dir,
            batch_size: env_parse("PALATE_BATCH_SIZE", defaults.batch_size),
        }
    }

    /// Check every invariant the pipeline relies on. Call once at
    /// process start, before serving any request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("highly_likely", self.thresholds.highly_likely),
            ("worth_trying", self.thresholds.worth_trying),
            ("proceed_caution", self.thresholds.proceed_caution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdRange { name, value });
            }
        }

        let t = &self.thresholds;
        if !(t.highly_likely > t.worth_trying && t.worth_trying > t.proceed_caution) {
            return Err(ConfigError::ThresholdOrder {
                highly_likely: t.highly_likely,
                worth_trying: t.worth_trying,
                proceed_caution: t.proceed_caution,
            });
        }

        let w = &self.weights;
        let in_range =
            (0.0..=1.0).contains(&w.sentiment_weight) && (0.0..=1.0).contains(&w.theme_weight);
        if !in_range || (w.sentiment_weight + w.theme_weight - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights {
                sentiment_weight: w.sentiment_weight,
                theme_weight: w.theme_weight,
            });
        }

        if self.filter.min_chars > self.filter.max_chars {
            return Err(ConfigError::InvalidLengthBounds {
                min_chars: self.filter.min_chars,
                max_chars: self.filter.max_chars,
            });
        }

        if !(self.filter.max_token_share > 0.0 && self.filter.max_token_share <= 1.0) {
            return Err(ConfigError::InvalidTokenShare(self.filter.max_token_share));
        }

        for pattern in &self.filter.spam_patterns {
            if let Err(e) = regex_lite::Regex::new(pattern) {
                return Err(ConfigError::InvalidSpamPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Parse an env var, falling back to the default when unset or malformed.
fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_rejected() {
        let mut config = Config::default();
        config.thresholds.worth_trying = 0.9; // above highly_likely
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOrder { .. }));
    }

    #[test]
    fn equal_thresholds_rejected() {
        let mut config = Config::default();
        config.thresholds.worth_trying = config.thresholds.highly_likely;
        assert!(config.validate().is_err());
    }

    #[test]
    fn threshold_above_one_rejected() {
        let mut config = Config::default();
        config.thresholds.highly_likely = 1.2;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdRange { .. }));
    }

    #[test]
    fn weights_must_sum_to_one() {
        let mut config = Config::default();
        config.weights.sentiment_weight = 0.7;
        // theme_weight still 0.5 — sum 1.2
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeights { .. }));
    }

    #[test]
    fn rebalanced_weights_validate() {
        let mut config = Config::default();
        config.weights.sentiment_weight = 0.7;
        config.weights.theme_weight = 0.3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_length_bounds_rejected() {
        let mut config = Config::default();
        config.filter.min_chars = 6000;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLengthBounds { .. }));
    }

    #[test]
    fn zero_token_share_rejected() {
        let mut config = Config::default();
        config.filter.max_token_share = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_spam_pattern_rejected() {
        let mut config = Config::default();
        config.filter.spam_patterns.push("(unclosed".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpamPattern { .. }));
    }
}
