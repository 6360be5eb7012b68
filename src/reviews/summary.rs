// Extractive summarizer — reduces a filtered batch to a representative
// subset plus ranked evidence snippets.
//
// The batch cap bounds the work the scoring stages do against the
// up-to-1000 raw pool. Sentences are scored by matched theme-keyword
// weight normalized by meaningful sentence length, with a flat bonus per
// sentiment indicator word. Selection is stable (ties keep original
// order) and capped per review so one verbose review cannot crowd out
// the rest of the batch.

use std::collections::{HashMap, HashSet};

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use crate::config::SummaryConfig;
use crate::model::FilteredReview;
use crate::sentiment::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::themes::vocabulary::ThemeVocabulary;

/// Sentences shorter than this never become snippets.
const MIN_SENTENCE_CHARS: usize = 15;

/// Flat score added per sentiment indicator word in a sentence.
const SENTIMENT_BONUS: f64 = 0.5;

/// One selected sentence with its provenance and score.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub text: String,
    pub review_index: usize,
    pub score: f64,
}

/// The capped review subset plus its ranked evidence snippets. The
/// subset is the text basis for theme extraction and sentiment scoring.
pub struct Digest<'a> {
    pub reviews: &'a [FilteredReview],
    pub snippets: Vec<Snippet>,
}

pub struct Summarizer {
    max_reviews: usize,
    per_review_snippets: usize,
    max_snippets: usize,
    sentence_split: Regex,
    stop_words: HashSet<String>,
}

impl Summarizer {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            max_reviews: config.max_reviews.max(1),
            per_review_snippets: config.per_review_snippets.max(1),
            max_snippets: config.max_snippets,
            sentence_split: Regex::new(r"[.!?]+").expect("valid sentence pattern"),
            stop_words: get(LANGUAGE::English).into_iter().collect(),
        }
    }

    /// Cap the batch and rank its sentences.
    pub fn digest<'a>(&self, reviews: &'a [FilteredReview]) -> Digest<'a> {
        let capped = &reviews[..reviews.len().min(self.max_reviews)];

        let mut scored: Vec<Snippet> = Vec::new();
        for (review_index, review) in capped.iter().enumerate() {
            for sentence in self.sentence_split.split(&review.text) {
                let sentence = sentence.trim();
                if sentence.chars().count() < MIN_SENTENCE_CHARS {
                    continue;
                }
                let score = self.score_sentence(sentence);
                if score > 0.0 {
                    scored.push(Snippet {
                        text: sentence.to_string(),
                        review_index,
                        score,
                    });
                }
            }
        }

        // Stable sort: equal scores keep original (review, sentence) order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let mut taken_per_review: HashMap<usize, usize> = HashMap::new();
        let mut snippets = Vec::new();
        for snippet in scored {
            if snippets.len() >= self.max_snippets {
                break;
            }
            let taken = taken_per_review.entry(snippet.review_index).or_insert(0);
            if *taken < self.per_review_snippets {
                *taken += 1;
                snippets.push(snippet);
            }
        }

        Digest {
            reviews: capped,
            snippets,
        }
    }

    /// Matched theme-keyword weight over non-stopword token count, plus
    /// a flat bonus per sentiment indicator word.
    fn score_sentence(&self, sentence: &str) -> f64 {
        let lower = sentence.to_lowercase();

        let keyword_weight: f64 = ThemeVocabulary::global()
            .all_keywords()
            .filter(|(term, _)| lower.contains(term))
            .map(|(_, weight)| weight)
            .sum();

        let meaningful_tokens = lower
            .split_whitespace()
            .filter(|t| {
                let bare = t.trim_matches(|c: char| !c.is_alphanumeric());
                !bare.is_empty() && !self.stop_words.contains(bare)
            })
            .count();

        let density = if meaningful_tokens == 0 {
            0.0
        } else {
            keyword_weight / meaningful_tokens as f64
        };

        let sentiment_hits = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .filter(|w| lower.contains(*w))
            .count();

        density + SENTIMENT_BONUS * sentiment_hits as f64
    }
}

/// The human-readable summary line carried on the result: review count,
/// dominant themes, and the strongest snippets.
pub fn compose_summary(digest: &Digest<'_>, alignment: &[String]) -> String {
    let review_count = digest.reviews.len();
    let theme_list = alignment
        .iter()
        .take(3)
        .map(|t| t.replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ");

    if digest.snippets.is_empty() {
        if theme_list.is_empty() {
            return format!("Analysis based on {review_count} reviews.");
        }
        return format!("Analysis based on {review_count} reviews emphasizing {theme_list}.");
    }

    let top_sentences = digest
        .snippets
        .iter()
        .take(3)
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");

    if theme_list.is_empty() {
        format!("Analysis of {review_count} reviews. {top_sentences}.")
    } else {
        format!("Analysis of {review_count} reviews highlighting {theme_list}. {top_sentences}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReviewSource;

    fn review(text: &str) -> FilteredReview {
        FilteredReview {
            text: text.to_string(),
            rating: None,
            author: None,
            source: ReviewSource::Steam,
        }
    }

    fn summarizer() -> Summarizer {
        Summarizer::new(&SummaryConfig::default())
    }

    #[test]
    fn batch_is_capped() {
        let config = SummaryConfig {
            max_reviews: 3,
            ..SummaryConfig::default()
        };
        let reviews: Vec<FilteredReview> = (0..5)
            .map(|i| review(&format!("Review {i} talks about the story at length.")))
            .collect();
        let summarizer = Summarizer::new(&config);
        let digest = summarizer.digest(&reviews);
        assert_eq!(digest.reviews.len(), 3);
    }

    #[test]
    fn short_sentences_are_skipped() {
        let reviews = [review("Great. Story good.")];
        let digest = summarizer().digest(&reviews);
        assert!(digest.snippets.is_empty());
    }

    #[test]
    fn keyword_sentences_outrank_bland_ones() {
        let reviews = [review(
            "The weather outside was entirely unremarkable today. \
             The storytelling and atmosphere reward patient viewers.",
        )];
        let digest = summarizer().digest(&reviews);
        assert!(!digest.snippets.is_empty());
        assert!(digest.snippets[0].text.contains("storytelling"));
    }

    #[test]
    fn sentiment_words_add_a_bonus() {
        let reviews = [
            review("The pacing felt deliberate throughout the whole season."),
            review("The pacing felt great throughout the whole season."),
        ];
        let digest = summarizer().digest(&reviews);
        assert!(digest.snippets.len() >= 2);
        assert!(digest.snippets[0].text.contains("great"));
        assert!(digest.snippets[0].score > digest.snippets[1].score);
    }

    #[test]
    fn per_review_cap_preserves_coverage() {
        let config = SummaryConfig {
            max_reviews: 100,
            per_review_snippets: 2,
            max_snippets: 8,
        };
        let verbose = "The story is great. The story is amazing. The story is the best. \
                       The story is perfect."
            .to_string();
        let summarizer = Summarizer::new(&config);
        let reviews = vec![review(&verbose), review("The atmosphere is excellent here.")];
        let digest = summarizer.digest(&reviews);

        let from_first = digest.snippets.iter().filter(|s| s.review_index == 0).count();
        assert!(from_first <= 2, "took {from_first} snippets from one review");
        assert!(digest.snippets.iter().any(|s| s.review_index == 1));
    }

    #[test]
    fn total_snippet_budget_holds() {
        let config = SummaryConfig {
            max_reviews: 100,
            per_review_snippets: 2,
            max_snippets: 4,
        };
        let summarizer = Summarizer::new(&config);
        let reviews: Vec<FilteredReview> = (0..10)
            .map(|i| review(&format!("Review {i} has a great story and atmosphere.")))
            .collect();
        let digest = summarizer.digest(&reviews);
        assert!(digest.snippets.len() <= 4);
    }

    #[test]
    fn equal_scores_keep_original_order() {
        // Identical sentences score identically; the stable sort keeps
        // the earlier review's snippet first.
        let reviews = [
            review("The atmosphere lingers long after the credits."),
            review("The atmosphere lingers long after the credits."),
        ];
        let digest = summarizer().digest(&reviews);
        assert_eq!(digest.snippets[0].review_index, 0);
    }

    #[test]
    fn summary_mentions_count_and_themes() {
        let reviews = vec![review("The storytelling and atmosphere reward patient viewers.")];
        let summarizer = summarizer();
        let digest = summarizer.digest(&reviews);
        let text = compose_summary(
            &digest,
            &["plot_twists".to_string(), "atmosphere".to_string()],
        );
        assert!(text.contains("1 reviews"));
        assert!(text.contains("plot twists, atmosphere"));
    }

    #[test]
    fn summary_without_snippets_still_reads() {
        let digest = Digest {
            reviews: &[],
            snippets: Vec::new(),
        };
        let text = compose_summary(&digest, &[]);
        assert_eq!(text, "Analysis based on 0 reviews.");
    }
}
