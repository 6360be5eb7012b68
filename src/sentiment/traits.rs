// Sentiment oracle trait — the swap-ready abstraction.
//
// Two implementations exist: the ONNX-backed BERT classifier and a
// lexicon mock used when the model fails to load. Selection happens once
// at process start; a single analysis never mixes verdicts from both.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The sentiment of a single review text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentVerdict {
    /// Star class, always in 1..=5.
    pub star_rating: u8,
    /// Classifier confidence in the chosen class, 0.0 to 1.0.
    pub confidence: f64,
}

/// Which backend produced the verdicts for a request. Exposed verbatim
/// in `AnalysisResult.evaluation.mode` so degradation is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Bert,
    Mock,
}

impl EvaluationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::Bert => "bert",
            EvaluationMode::Mock => "mock",
        }
    }
}

impl std::fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for scoring review sentiment. Async because model inference is
/// offloaded to a blocking thread pool; implementations must accept the
/// whole request as one batch call.
#[async_trait]
pub trait SentimentOracle: Send + Sync {
    /// Identifier reported in `AnalysisResult.evaluation.model`.
    fn model_name(&self) -> &str;

    /// Score a batch of texts, returning one verdict per text in the
    /// same order.
    async fn score_batch(&self, texts: &[String]) -> Result<Vec<SentimentVerdict>>;
}
