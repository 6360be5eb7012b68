// Typed errors for the analysis core.
//
// Only pipeline-wide failures reach the caller: malformed input records,
// an empty filtered set, or an oracle that cannot score the batch.
// Per-review rejections inside the filter are absorbed silently.
// Configuration problems are caught at process start and never surface
// at request time.

/// A failure of one analysis request.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    /// The input was not a sequence of review-shaped records (e.g. a
    /// record with no text at all).
    #[error("invalid review record: {0}")]
    Validation(String),

    /// Too few reviews survived filtering to produce a meaningful
    /// analysis. Distinct from a scraping failure — the scraper
    /// collaborator surfaces that as an empty input list, which lands
    /// here too.
    #[error("not enough reviews to analyze: {kept} kept, {required} required")]
    InsufficientReviews { kept: usize, required: usize },

    /// The sentiment oracle failed to score the batch. Carries a message
    /// only; the underlying error never leaks to callers.
    #[error("sentiment scoring failed: {0}")]
    Oracle(String),
}

/// A configuration problem, fatal at process start.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(
        "recommendation thresholds must be strictly ordered: \
         highly_likely ({highly_likely}) > worth_trying ({worth_trying}) \
         > proceed_caution ({proceed_caution})"
    )]
    ThresholdOrder {
        highly_likely: f64,
        worth_trying: f64,
        proceed_caution: f64,
    },

    #[error("recommendation threshold {name} = {value} is outside [0, 1]")]
    ThresholdRange { name: &'static str, value: f64 },

    #[error(
        "scoring weights must each be in [0, 1] and sum to 1: \
         sentiment_weight = {sentiment_weight}, theme_weight = {theme_weight}"
    )]
    InvalidWeights {
        sentiment_weight: f64,
        theme_weight: f64,
    },

    #[error("review length bounds are inverted: min_chars ({min_chars}) > max_chars ({max_chars})")]
    InvalidLengthBounds { min_chars: usize, max_chars: usize },

    #[error("max_token_share must be in (0, 1], got {0}")]
    InvalidTokenShare(f64),

    #[error("invalid spam pattern {pattern:?}: {message}")]
    InvalidSpamPattern { pattern: String, message: String },
}
