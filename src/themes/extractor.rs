// Theme extraction — scores review text against the fixed vocabulary.
//
// Per review, a theme's score is the sum of keyword weight × occurrence
// count, multiplied by a concentration bonus when two or more distinct
// keywords of that theme match in the same review. Scattered incidental
// hits across many reviews therefore rank below genuine thematic focus.
//
// Keywords match as substrings of the lowercased text, so "love" also
// counts "lovely" — same behavior the scraped-review corpus was tuned on.

use crate::model::FilteredReview;
use crate::themes::vocabulary::ThemeVocabulary;

/// A theme with its aggregate extraction score. Score is always > 0;
/// unmatched themes are excluded from the output entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeScore {
    pub theme: String,
    pub score: f64,
}

/// How many theme names make up `theme_alignment`.
pub const ALIGNMENT_SIZE: usize = 4;

pub struct ThemeExtractor {
    /// Multiplier applied to a review's per-theme score when the review
    /// matches at least two distinct keywords of that theme.
    pub concentration_bonus: f64,
}

impl Default for ThemeExtractor {
    fn default() -> Self {
        Self {
            concentration_bonus: 1.2,
        }
    }
}

impl ThemeExtractor {
    /// Score every theme across the batch. Returns matched themes only,
    /// sorted by aggregate score descending; ties keep vocabulary order
    /// (the sort is stable over scores accumulated in registry order).
    pub fn extract(&self, reviews: &[FilteredReview]) -> Vec<ThemeScore> {
        let vocab = ThemeVocabulary::global();
        let mut totals = vec![0.0_f64; vocab.theme_count()];

        for review in reviews {
            let lower = review.text.to_lowercase();
            for (i, entry) in vocab.entries().iter().enumerate() {
                let mut base = 0.0;
                let mut distinct = 0usize;
                for (term, weight) in entry.keywords {
                    let count = count_occurrences(&lower, term);
                    if count > 0 {
                        distinct += 1;
                        base += weight * count as f64;
                    }
                }
                if distinct >= 2 {
                    base *= self.concentration_bonus;
                }
                totals[i] += base;
            }
        }

        let mut scores: Vec<ThemeScore> = vocab
            .entries()
            .iter()
            .zip(totals)
            .filter(|(_, score)| *score > 0.0)
            .map(|(entry, score)| ThemeScore {
                theme: entry.name.to_string(),
                score,
            })
            .collect();

        scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }
}

/// Top theme names for the result, at most [`ALIGNMENT_SIZE`].
pub fn alignment(scores: &[ThemeScore]) -> Vec<String> {
    scores
        .iter()
        .take(ALIGNMENT_SIZE)
        .map(|t| t.theme.clone())
        .collect()
}

/// Non-overlapping substring occurrences.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + needle.len();
    }
    count
}
