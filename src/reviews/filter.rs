// Review filter — drops duplicate, truncated, spammy, and bot-generated
// reviews before any scoring happens.
//
// Rules run as ordered passes over the batch: dedup, length bounds, spam
// patterns, token repetition. A review rejected by any rule is dropped
// silently; the filter itself never fails. Output order follows input
// order, and filtering an already-filtered batch is a no-op.

use std::collections::HashSet;

use regex_lite::Regex;
use tracing::{debug, info};

use crate::config::FilterConfig;
use crate::error::ConfigError;
use crate::model::{FilteredReview, RawReview};

pub struct ReviewFilter {
    min_chars: usize,
    max_chars: usize,
    max_token_share: f64,
    spam_regex: Regex,
}

impl ReviewFilter {
    /// Compile the spam patterns into one case-insensitive alternation.
    /// Pattern problems are configuration errors, caught at startup.
    pub fn new(config: &FilterConfig) -> Result<Self, ConfigError> {
        let joined = format!("(?i){}", config.spam_patterns.join("|"));
        let spam_regex = Regex::new(&joined).map_err(|e| ConfigError::InvalidSpamPattern {
            pattern: joined.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            min_chars: config.min_chars,
            max_chars: config.max_chars,
            max_token_share: config.max_token_share,
            spam_regex,
        })
    }

    /// Apply all filter rules in order. Order-preserving; drops are
    /// logged at debug level and summarized once at info level.
    pub fn filter(&self, reviews: &[RawReview]) -> Vec<FilteredReview> {
        let total = reviews.len();

        // Pass 1: dedup on normalized text, first occurrence wins
        let mut seen = HashSet::new();
        let deduped: Vec<&RawReview> = reviews
            .iter()
            .filter(|r| seen.insert(normalize(&r.text)))
            .collect();
        let duplicates = total - deduped.len();

        let mut too_short_or_long = 0usize;
        let mut spam = 0usize;
        let mut repetitive = 0usize;

        let kept: Vec<FilteredReview> = deduped
            .into_iter()
            .filter(|r| {
                // Pass 2: trimmed length bounds (inclusive)
                let len = r.text.trim().chars().count();
                if len < self.min_chars || len > self.max_chars {
                    too_short_or_long += 1;
                    debug!(source = %r.source, chars = len, "Dropped review outside length bounds");
                    return false;
                }
                // Pass 3: spam / advertorial patterns
                if self.spam_regex.is_match(&r.text) {
                    spam += 1;
                    debug!(source = %r.source, "Dropped spam review");
                    return false;
                }
                // Pass 4: single-token repetition
                if self.is_repetitive(&r.text) {
                    repetitive += 1;
                    debug!(source = %r.source, "Dropped repetitive review");
                    return false;
                }
                true
            })
            .map(|r| FilteredReview {
                text: r.text.trim().to_string(),
                rating: r.rating,
                author: r.author.clone(),
                source: r.source,
            })
            .collect();

        info!(
            total,
            kept = kept.len(),
            duplicates,
            length = too_short_or_long,
            spam,
            repetitive,
            "Filtered reviews"
        );

        kept
    }

    /// A review is repetitive when one token accounts for strictly more
    /// than `max_token_share` of all tokens. Exactly at the threshold is
    /// kept.
    fn is_repetitive(&self, text: &str) -> bool {
        let normalized = normalize(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return false;
        }

        let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
        for token in &tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(0);

        max_count as f64 / tokens.len() as f64 > self.max_token_share
    }
}

/// Casefold and collapse whitespace so "Great  movie!" and "GREAT movie!"
/// compare equal.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
