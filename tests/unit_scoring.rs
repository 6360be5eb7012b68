// Unit tests for the scoring chain: compatibility formula through
// recommendation classification, plus the configuration guards that
// keep the chain well-defined at request time.

use palate::config::{Config, ScoringWeights, TierThresholds};
use palate::scoring::compatibility::compute_compatibility;
use palate::scoring::recommendation::Recommendation;

// ============================================================
// Compatibility → Recommendation chain
// ============================================================

#[test]
fn documented_scenario_lands_in_worth_trying() {
    // meanSentiment 0.75, themeOverlap 0.60, equal weights → 0.675
    let weights = ScoringWeights::default();
    let thresholds = TierThresholds::default();

    let score = compute_compatibility(0.75, 0.60, &weights);
    assert!((score - 0.675).abs() < 1e-9, "got {score}");

    let tier = Recommendation::from_score(score, &thresholds);
    assert_eq!(tier, Recommendation::WorthTrying);
}

#[test]
fn perfect_inputs_are_highly_likely() {
    let weights = ScoringWeights::default();
    let thresholds = TierThresholds::default();
    let score = compute_compatibility(1.0, 1.0, &weights);
    assert_eq!(
        Recommendation::from_score(score, &thresholds),
        Recommendation::HighlyLikely
    );
}

#[test]
fn perfect_sentiment_with_no_theme_overlap_is_cautionary() {
    let weights = ScoringWeights::default();
    let thresholds = TierThresholds::default();
    let score = compute_compatibility(1.0, 0.0, &weights);
    assert!((score - 0.5).abs() < 1e-9);
    assert_eq!(
        Recommendation::from_score(score, &thresholds),
        Recommendation::ProceedWithCaution
    );
}

#[test]
fn zero_inputs_are_likely_to_disappoint() {
    let weights = ScoringWeights::default();
    let thresholds = TierThresholds::default();
    let score = compute_compatibility(0.0, 0.0, &weights);
    assert_eq!(
        Recommendation::from_score(score, &thresholds),
        Recommendation::LikelyToDisappoint
    );
}

// ============================================================
// Properties over the whole input grid
// ============================================================

#[test]
fn score_is_always_in_unit_range() {
    let weights = ScoringWeights::default();
    for i in 0..=20 {
        for j in 0..=20 {
            let score = compute_compatibility(i as f64 / 20.0, j as f64 / 20.0, &weights);
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }
}

#[test]
fn classification_is_monotone_in_the_score() {
    let thresholds = TierThresholds::default();
    let mut previous: Option<Recommendation> = None;
    for i in 0..=1000 {
        let tier = Recommendation::from_score(i as f64 / 1000.0, &thresholds);
        if let Some(prev) = previous {
            assert!(
                prev.rank() <= tier.rank(),
                "tier regressed between adjacent scores: {prev} then {tier}"
            );
        }
        previous = Some(tier);
    }
}

#[test]
fn rebalanced_weights_still_produce_valid_tiers() {
    let weights = ScoringWeights {
        sentiment_weight: 0.9,
        theme_weight: 0.1,
    };
    let thresholds = TierThresholds::default();
    let score = compute_compatibility(0.9, 0.0, &weights);
    assert!((score - 0.81).abs() < 1e-9);
    assert_eq!(
        Recommendation::from_score(score, &thresholds),
        Recommendation::HighlyLikely
    );
}

// ============================================================
// Startup configuration guards
// ============================================================

#[test]
fn default_configuration_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn misordered_thresholds_never_reach_request_time() {
    let mut config = Config::default();
    config.thresholds = TierThresholds {
        highly_likely: 0.4,
        worth_trying: 0.6,
        proceed_caution: 0.8,
    };
    assert!(config.validate().is_err());
}

#[test]
fn lopsided_weights_are_rejected_up_front() {
    let mut config = Config::default();
    config.weights = ScoringWeights {
        sentiment_weight: 0.9,
        theme_weight: 0.9,
    };
    assert!(config.validate().is_err());
}
