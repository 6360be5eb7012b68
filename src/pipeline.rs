// Analysis orchestrator — sequences the pipeline stages for one request.
//
// Given a raw review batch and a preference profile, this module:
// 1. Validates the records are review-shaped
// 2. Filters duplicates, spam, and bot repetition
// 3. Caps the batch and ranks evidence snippets
// 4. Extracts and ranks themes against the vocabulary
// 5. Scores sentiment through the selected oracle (one batch call)
// 6. Aligns verdicts into the public distribution
// 7. Combines sentiment and theme overlap into the compatibility score
// 8. Classifies the recommendation tier and assembles the result
//
// The pipeline is pure apart from the oracle call: no writes, no
// external calls, nothing to clean up if the caller abandons it.

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::error::{AnalysisError, ConfigError};
use crate::model::{AnalysisResult, RawReview, UserPreferenceProfile};
use crate::reviews::filter::ReviewFilter;
use crate::reviews::summary::{compose_summary, Summarizer};
use crate::scoring::compatibility::compute_compatibility;
use crate::scoring::recommendation::Recommendation;
use crate::sentiment::aligner;
use crate::sentiment::SelectedOracle;
use crate::themes::extractor::{alignment, ThemeExtractor, ThemeScore, ALIGNMENT_SIZE};
use crate::themes::overlap::theme_overlap;

/// One analysis pipeline instance. Holds only read-only state (validated
/// configuration, compiled filters, the startup-selected oracle), so a
/// single Analyzer serves any number of sequential or concurrent
/// requests.
pub struct Analyzer {
    config: Config,
    filter: ReviewFilter,
    summarizer: Summarizer,
    extractor: ThemeExtractor,
    oracle: SelectedOracle,
}

impl Analyzer {
    /// Validate the configuration and build the pipeline. Configuration
    /// problems surface here, at process start — never at request time.
    pub fn new(config: Config, oracle: SelectedOracle) -> Result<Self, ConfigError> {
        config.validate()?;
        let filter = ReviewFilter::new(&config.filter)?;
        let summarizer = Summarizer::new(&config.summary);
        Ok(Self {
            config,
            filter,
            summarizer,
            extractor: ThemeExtractor::default(),
            oracle,
        })
    }

    /// The one operation exposed to collaborators.
    pub async fn analyze(
        &self,
        raw_reviews: &[RawReview],
        profile: &UserPreferenceProfile,
    ) -> Result<AnalysisResult, AnalysisError> {
        // Step 1: the input must be a sequence of review-shaped records
        if let Some(position) = raw_reviews.iter().position(|r| r.text.trim().is_empty()) {
            return Err(AnalysisError::Validation(format!(
                "review at index {position} has no text"
            )));
        }

        // Step 2: filter; an empty surviving set always fails the request
        let filtered = self.filter.filter(raw_reviews);
        let required = self.config.min_reviews.max(1);
        if filtered.len() < required {
            return Err(AnalysisError::InsufficientReviews {
                kept: filtered.len(),
                required,
            });
        }

        // Step 3: cap the batch and rank evidence snippets
        let digest = self.summarizer.digest(&filtered);

        // Step 4: extract and rank themes
        let theme_scores = self.extractor.extract(digest.reviews);
        let alignment_scores: Vec<ThemeScore> =
            theme_scores.iter().take(ALIGNMENT_SIZE).cloned().collect();
        let theme_alignment = alignment(&theme_scores);

        // Step 5: sentiment — the request's reviews go out as one batch
        let texts: Vec<String> = digest.reviews.iter().map(|r| r.text.clone()).collect();
        let verdicts = self
            .oracle
            .oracle
            .score_batch(&texts)
            .await
            .map_err(|e| AnalysisError::Oracle(e.to_string()))?;

        // Step 6: align into the public distribution
        let breakdown = aligner::align(&verdicts)
            .ok_or_else(|| AnalysisError::Oracle("oracle returned no verdicts".to_string()))?;

        // Step 7: compatibility
        let overlap = theme_overlap(&alignment_scores, &profile.themes);
        let compatibility_score =
            compute_compatibility(breakdown.mean_unit, overlap, &self.config.weights);

        // Step 8: classify and assemble
        let recommendation = Recommendation::from_score(compatibility_score, &self.config.thresholds);
        let summary = compose_summary(&digest, &theme_alignment);
        let now = Utc::now();

        info!(
            score = format!("{compatibility_score:.3}"),
            recommendation = recommendation.as_str(),
            themes = ?theme_alignment,
            mean_sentiment = format!("{:.3}", breakdown.mean_unit),
            overlap = format!("{overlap:.3}"),
            reviews = digest.reviews.len(),
            mode = self.oracle.mode.as_str(),
            "Analysis complete"
        );

        Ok(AnalysisResult {
            compatibility_score,
            recommendation,
            theme_alignment,
            sentiment_summary: breakdown.summary,
            evaluation: self.oracle.evaluation(),
            summary,
            reviews_analyzed: digest.reviews.len() as u32,
            analysis_id: format!("analysis_{}", now.timestamp()),
            timestamp: now.to_rfc3339(),
        })
    }
}
