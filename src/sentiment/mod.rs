// Sentiment scoring — trait-based abstraction over two backends.
//
// The BERT-backed oracle is attempted once at process start. If it fails
// to initialize (missing model files, broken runtime), the process falls
// back to the lexicon mock for its whole lifetime and every result
// reports evaluation.mode = "mock". The selection is never revisited
// mid-request, so one analysis never mixes verdicts from both backends.

pub mod aligner;
pub mod bert;
pub mod download;
pub mod mock;
pub mod traits;

use tracing::{info, warn};

use crate::config::{Config, OracleBackend};
use crate::model::Evaluation;
use traits::{EvaluationMode, SentimentOracle};

/// Sentiment indicator words shared by the mock oracle and the
/// summarizer's bonus scoring.
pub const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "perfect",
    "masterpiece",
    "brilliant",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "worst",
    "terrible",
    "awful",
    "hate",
    "disappointing",
    "boring",
    "mediocre",
];

/// The backend chosen at startup, fixed for the process lifetime.
pub struct SelectedOracle {
    pub oracle: Box<dyn SentimentOracle>,
    pub mode: EvaluationMode,
}

impl SelectedOracle {
    /// The transparency record attached to every AnalysisResult.
    pub fn evaluation(&self) -> Evaluation {
        Evaluation {
            mode: self.mode,
            model: self.oracle.model_name().to_string(),
        }
    }
}

/// Select the sentiment backend. Call exactly once at process start and
/// thread the result into the analyzer — there is no global.
pub fn select_oracle(config: &Config) -> SelectedOracle {
    match config.oracle_backend {
        OracleBackend::Bert => {
            match bert::BertSentimentOracle::load(
                &config.model_dir,
                &config.model_name,
                config.batch_size,
            ) {
                Ok(oracle) => {
                    info!(model = %config.model_name, "Loaded BERT sentiment oracle");
                    SelectedOracle {
                        oracle: Box::new(oracle),
                        mode: EvaluationMode::Bert,
                    }
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        "Sentiment model failed to initialize; using mock scoring for the \
                         rest of this process"
                    );
                    mock_oracle()
                }
            }
        }
        OracleBackend::Mock => {
            info!("Using mock sentiment oracle (PALATE_ORACLE=mock)");
            mock_oracle()
        }
    }
}

fn mock_oracle() -> SelectedOracle {
    SelectedOracle {
        oracle: Box::new(mock::MockSentimentOracle),
        mode: EvaluationMode::Mock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_mock_backend_selects_mock() {
        let mut config = Config::default();
        config.oracle_backend = OracleBackend::Mock;
        let selected = select_oracle(&config);
        assert_eq!(selected.mode, EvaluationMode::Mock);
        assert_eq!(selected.evaluation().model, mock::MOCK_MODEL_NAME);
    }

    #[test]
    fn missing_model_files_fall_back_to_mock() {
        let mut config = Config::default();
        config.oracle_backend = OracleBackend::Bert;
        config.model_dir = std::env::temp_dir().join("palate-no-such-model-dir");
        let selected = select_oracle(&config);
        assert_eq!(selected.mode, EvaluationMode::Mock);
    }
}
