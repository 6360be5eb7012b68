// Sentiment aligner — turns per-review verdicts into the normalized
// distribution the scorer and the API consume.
//
// Star ratings map to unit scores via (stars - 1) / 4. Buckets: 4-5
// stars positive, 3 neutral, 1-2 negative. The public percentages are
// confidence-weighted; the mean that feeds compatibility scoring is the
// plain unweighted average of the unit scores.

use crate::model::SentimentSummary;
use crate::sentiment::traits::SentimentVerdict;

/// Aggregated sentiment for one request.
#[derive(Debug, Clone, Copy)]
pub struct SentimentBreakdown {
    pub summary: SentimentSummary,
    /// Unweighted arithmetic mean of the unit scores, in [0, 1].
    pub mean_unit: f64,
}

/// Map a star rating to the unit interval: 1 star → 0.0, 5 stars → 1.0.
pub fn unit_score(stars: u8) -> f64 {
    (stars.clamp(1, 5) - 1) as f64 / 4.0
}

/// Aggregate a request's verdicts. Returns None for an empty slice —
/// the orchestrator decides what an empty request means.
///
/// Percentages are nearest-integer rounded; the rounding remainder goes
/// to the heaviest bucket so the three always sum to exactly 100. If
/// every confidence is zero, plain counts stand in as weights.
pub fn align(verdicts: &[SentimentVerdict]) -> Option<SentimentBreakdown> {
    if verdicts.is_empty() {
        return None;
    }

    let mean_unit = verdicts
        .iter()
        .map(|v| unit_score(v.star_rating))
        .sum::<f64>()
        / verdicts.len() as f64;

    // Bucket order: positive, neutral, negative
    let mut weights = [0.0_f64; 3];
    let mut counts = [0usize; 3];
    for v in verdicts {
        let bucket = match v.star_rating {
            4 | 5 => 0,
            3 => 1,
            _ => 2,
        };
        weights[bucket] += v.confidence;
        counts[bucket] += 1;
    }

    if weights.iter().sum::<f64>() <= 0.0 {
        weights = [counts[0] as f64, counts[1] as f64, counts[2] as f64];
    }
    let total: f64 = weights.iter().sum();

    let mut percentages: [i64; 3] = [0; 3];
    for (p, w) in percentages.iter_mut().zip(weights.iter()) {
        *p = (w / total * 100.0).round() as i64;
    }

    let remainder = 100 - percentages.iter().sum::<i64>();
    let heaviest = weights
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);
    percentages[heaviest] += remainder;

    Some(SentimentBreakdown {
        summary: SentimentSummary {
            positive: percentages[0] as u32,
            neutral: percentages[1] as u32,
            negative: percentages[2] as u32,
        },
        mean_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(stars: u8, confidence: f64) -> SentimentVerdict {
        SentimentVerdict {
            star_rating: stars,
            confidence,
        }
    }

    fn sum(summary: &SentimentSummary) -> u32 {
        summary.positive + summary.neutral + summary.negative
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(align(&[]).is_none());
    }

    #[test]
    fn unit_score_endpoints() {
        assert_eq!(unit_score(1), 0.0);
        assert_eq!(unit_score(3), 0.5);
        assert_eq!(unit_score(5), 1.0);
    }

    #[test]
    fn buckets_follow_star_classes() {
        let breakdown = align(&[
            verdict(5, 0.9),
            verdict(4, 0.9),
            verdict(3, 0.9),
            verdict(2, 0.9),
            verdict(1, 0.9),
        ])
        .unwrap();
        // Equal confidence: positive 2/5, neutral 1/5, negative 2/5
        assert_eq!(breakdown.summary.positive, 40);
        assert_eq!(breakdown.summary.neutral, 20);
        assert_eq!(breakdown.summary.negative, 40);
    }

    #[test]
    fn percentages_always_sum_to_100() {
        let cases: Vec<Vec<SentimentVerdict>> = vec![
            vec![verdict(5, 0.8)],
            vec![verdict(5, 0.9), verdict(3, 0.8), verdict(1, 0.7)],
            vec![verdict(4, 0.33), verdict(3, 0.33), verdict(2, 0.33)],
            vec![verdict(5, 0.5); 7],
            vec![
                verdict(5, 0.91),
                verdict(4, 0.72),
                verdict(3, 0.55),
                verdict(2, 0.64),
                verdict(1, 0.88),
                verdict(4, 0.13),
                verdict(2, 0.99),
            ],
        ];
        for verdicts in &cases {
            let breakdown = align(verdicts).unwrap();
            assert_eq!(sum(&breakdown.summary), 100, "{verdicts:?}");
        }
    }

    #[test]
    fn rounding_remainder_goes_to_heaviest_bucket() {
        // Three equal-confidence verdicts, one per bucket: 33/33/33 plus
        // a remainder of 1 assigned to the heaviest (first max → positive).
        let breakdown = align(&[verdict(5, 0.6), verdict(3, 0.6), verdict(1, 0.6)]).unwrap();
        assert_eq!(breakdown.summary.positive, 34);
        assert_eq!(breakdown.summary.neutral, 33);
        assert_eq!(breakdown.summary.negative, 33);
    }

    #[test]
    fn confidence_weights_the_percentages() {
        let breakdown = align(&[verdict(5, 0.1), verdict(1, 0.9)]).unwrap();
        assert_eq!(breakdown.summary.positive, 10);
        assert_eq!(breakdown.summary.negative, 90);
        assert_eq!(breakdown.summary.neutral, 0);
    }

    #[test]
    fn mean_is_unweighted_by_confidence() {
        // Same stars, wildly different confidences → same mean
        let breakdown = align(&[verdict(5, 0.1), verdict(1, 0.9)]).unwrap();
        assert!((breakdown.mean_unit - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_confidences_fall_back_to_counts() {
        let breakdown = align(&[verdict(5, 0.0), verdict(5, 0.0), verdict(1, 0.0)]).unwrap();
        assert_eq!(sum(&breakdown.summary), 100);
        assert_eq!(breakdown.summary.positive, 67);
        assert_eq!(breakdown.summary.negative, 33);
    }

    #[test]
    fn all_positive_is_a_full_bucket() {
        let breakdown = align(&[verdict(5, 0.9), verdict(4, 0.8)]).unwrap();
        assert_eq!(breakdown.summary.positive, 100);
        assert_eq!(breakdown.summary.neutral, 0);
        assert_eq!(breakdown.summary.negative, 0);
        assert!((breakdown.mean_unit - 0.875).abs() < 1e-9);
    }
}
