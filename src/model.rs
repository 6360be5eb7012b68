// Data models — the types that flow through the analysis pipeline.
//
// These are separate from the pipeline stages so collaborators (the API
// boundary, the CLI) can use them without depending on stage internals.
// AnalysisResult is serialized camelCase because the API boundary passes
// its fields through unchanged.

use serde::{Deserialize, Serialize};

/// Platform a review was scraped from. The scraper collaborator tags
/// every review before it reaches this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Imdb,
    Steam,
    Metacritic,
}

impl ReviewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSource::Imdb => "imdb",
            ReviewSource::Steam => "steam",
            ReviewSource::Metacritic => "metacritic",
        }
    }
}

impl std::fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported media types for a user's preference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Tv,
    Movie,
    Game,
}

/// A review as delivered by the scraper collaborator. Immutable once
/// created; consumed only by the review filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    pub text: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub author: Option<String>,
    pub source: ReviewSource,
}

/// A review that survived filtering. Text is trimmed; the length, dedup,
/// spam, and repetition invariants hold. Created per request, never
/// persisted.
#[derive(Debug, Clone)]
pub struct FilteredReview {
    pub text: String,
    pub rating: Option<f64>,
    pub author: Option<String>,
    pub source: ReviewSource,
}

/// The user's stored taste profile, supplied by the persistence
/// collaborator. Read-only to this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferenceProfile {
    pub themes: std::collections::BTreeSet<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    pub media_type: MediaType,
}

/// Sentiment distribution across the filtered reviews. The three
/// percentages always sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Which sentiment backend produced this analysis. "mock" means the
/// model failed to load at startup and the degraded fallback ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub mode: crate::sentiment::traits::EvaluationMode,
    pub model: String,
}

/// The complete output of one analysis request. Built once by the
/// orchestrator, immutable afterward, handed to the API boundary as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub compatibility_score: f64,
    pub recommendation: crate::scoring::recommendation::Recommendation,
    /// Top theme names by aggregate extraction score, at most 4.
    pub theme_alignment: Vec<String>,
    pub sentiment_summary: SentimentSummary,
    pub evaluation: Evaluation,
    /// Extractive summary built from the highest-scoring review sentences.
    pub summary: String,
    pub reviews_analyzed: u32,
    pub analysis_id: String,
    pub timestamp: String,
}
