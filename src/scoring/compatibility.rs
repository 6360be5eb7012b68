// Compatibility score formula.
//
// A convex combination of the mean normalized sentiment and the weighted
// theme overlap. The weights come from configuration (validated at
// startup to sum to 1), so the blend can be tuned without touching this
// code. The result is clamped to [0, 1] regardless of input.

use crate::config::ScoringWeights;

/// Compute the compatibility score from mean sentiment and theme
/// overlap, both expected in [0, 1].
pub fn compute_compatibility(
    mean_sentiment: f64,
    theme_overlap: f64,
    weights: &ScoringWeights,
) -> f64 {
    let score =
        weights.sentiment_weight * mean_sentiment + weights.theme_weight * theme_overlap;
    score.clamp(0.0, 1.0)
}
