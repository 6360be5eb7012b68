// Recommendation tiers — a pure threshold lookup over the compatibility
// score. The thresholds are configuration, validated at startup to be
// strictly ordered, so this stays a straight ladder at request time.

use serde::{Deserialize, Serialize};

use crate::config::TierThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Highly Likely")]
    HighlyLikely,
    #[serde(rename = "Worth Trying")]
    WorthTrying,
    #[serde(rename = "Proceed with Caution")]
    ProceedWithCaution,
    #[serde(rename = "Likely to Disappoint")]
    LikelyToDisappoint,
}

impl Recommendation {
    /// Determine the tier from a compatibility score (0-1).
    pub fn from_score(score: f64, thresholds: &TierThresholds) -> Self {
        match score {
            s if s >= thresholds.highly_likely => Recommendation::HighlyLikely,
            s if s >= thresholds.worth_trying => Recommendation::WorthTrying,
            s if s >= thresholds.proceed_caution => Recommendation::ProceedWithCaution,
            _ => Recommendation::LikelyToDisappoint,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::HighlyLikely => "Highly Likely",
            Recommendation::WorthTrying => "Worth Trying",
            Recommendation::ProceedWithCaution => "Proceed with Caution",
            Recommendation::LikelyToDisappoint => "Likely to Disappoint",
        }
    }

    /// Ordering rank for monotonicity checks: higher is better.
    pub fn rank(&self) -> u8 {
        match self {
            Recommendation::LikelyToDisappoint => 0,
            Recommendation::ProceedWithCaution => 1,
            Recommendation::WorthTrying => 2,
            Recommendation::HighlyLikely => 3,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
