// Lexicon-based mock oracle — the degraded fallback.
//
// Used only when the BERT model fails to initialize. Counts sentiment
// indicator words to produce a plausible star rating without touching a
// model. Deterministic: the same text always yields the same verdict,
// which also makes the degraded mode testable.

use anyhow::Result;
use async_trait::async_trait;

use super::traits::{SentimentOracle, SentimentVerdict};
use super::{NEGATIVE_WORDS, POSITIVE_WORDS};

pub const MOCK_MODEL_NAME: &str = "builtin-lexicon";

pub struct MockSentimentOracle;

impl MockSentimentOracle {
    fn score_text(text: &str) -> SentimentVerdict {
        let lower = text.to_lowercase();
        let positive: usize = POSITIVE_WORDS.iter().map(|w| lower.matches(w).count()).sum();
        let negative: usize = NEGATIVE_WORDS.iter().map(|w| lower.matches(w).count()).sum();

        let stars = (3i64 + positive as i64 - negative as i64).clamp(1, 5) as u8;
        // More indicator hits → more confident; a text with none stays at 0.5
        let confidence = (0.5 + 0.1 * (positive + negative) as f64).min(0.95);

        SentimentVerdict {
            star_rating: stars,
            confidence,
        }
    }
}

#[async_trait]
impl SentimentOracle for MockSentimentOracle {
    fn model_name(&self) -> &str {
        MOCK_MODEL_NAME
    }

    async fn score_batch(&self, texts: &[String]) -> Result<Vec<SentimentVerdict>> {
        Ok(texts.iter().map(|t| Self::score_text(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_scores_three_stars() {
        let verdict = MockSentimentOracle::score_text("The third season covers the war years.");
        assert_eq!(verdict.star_rating, 3);
        assert!((verdict.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn positive_text_scores_high() {
        let verdict =
            MockSentimentOracle::score_text("Great pacing and an amazing cast, the best this year.");
        assert_eq!(verdict.star_rating, 5);
        assert!(verdict.confidence > 0.5);
    }

    #[test]
    fn negative_text_scores_low() {
        let verdict =
            MockSentimentOracle::score_text("Terrible writing, awful effects, the worst sequel.");
        assert_eq!(verdict.star_rating, 1);
    }

    #[test]
    fn stars_stay_in_range_for_extreme_text() {
        let gushing = "great amazing excellent perfect best love masterpiece brilliant".repeat(3);
        let verdict = MockSentimentOracle::score_text(&gushing);
        assert!((1..=5).contains(&verdict.star_rating));
        assert!(verdict.confidence <= 0.95);
    }

    #[test]
    fn verdicts_are_deterministic() {
        let text = "A great story undermined by bad pacing.";
        let a = MockSentimentOracle::score_text(text);
        let b = MockSentimentOracle::score_text(text);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn batch_preserves_order_and_length() {
        let oracle = MockSentimentOracle;
        let texts = vec![
            "Great great great stuff.".to_string(),
            "Entirely neutral words.".to_string(),
            "Awful awful awful stuff.".to_string(),
        ];
        let verdicts = oracle.score_batch(&texts).await.unwrap();
        assert_eq!(verdicts.len(), 3);
        assert!(verdicts[0].star_rating > verdicts[1].star_rating);
        assert!(verdicts[1].star_rating > verdicts[2].star_rating);
    }
}
