// BERT sentiment oracle using the nlptown multilingual 1-to-5-star
// classifier over ONNX Runtime.
//
// Runs entirely on the local CPU — no API calls, no rate limits, no
// network dependency at request time. The model emits one logit per star
// class; softmax gives the class distribution, the argmax becomes the
// star rating and its probability the confidence.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::traits::{SentimentOracle, SentimentVerdict};

/// Star classes output by the model, in logit order: index 0 is 1 star.
const STAR_CLASSES: usize = 5;

/// ONNX-based sentiment oracle. Session and tokenizer sit behind Arc so
/// inference can move to spawn_blocking; the Mutex satisfies
/// Session::run's &mut self. Inference is serialized through the
/// blocking pool, so contention stays minimal.
pub struct BertSentimentOracle {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    model_name: String,
    batch_size: usize,
}

impl BertSentimentOracle {
    /// Load the ONNX model and tokenizer from the given directory.
    ///
    /// Expects `model_quantized.onnx` and `tokenizer.json` in
    /// `model_dir`. Run `palate download-model` first if they're
    /// missing.
    pub fn load(model_dir: &Path, model_name: &str, batch_size: usize) -> Result<Self> {
        let model_path = model_dir.join("model_quantized.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            anyhow::bail!(
                "Model file not found: {}\nRun `palate download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Tokenizer file not found: {}\nRun `palate download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        debug!("Loaded ONNX sentiment model from {}", model_dir.display());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name: model_name.to_string(),
            batch_size: batch_size.max(1),
        })
    }
}

#[async_trait]
impl SentimentOracle for BertSentimentOracle {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Batched inference: the request's texts are split into a small
    /// fixed number of `batch_size` chunks and each chunk runs as one
    /// forward pass. All CPU-bound work (tokenization + inference) is
    /// offloaded to spawn_blocking so the async runtime stays
    /// responsive.
    async fn score_batch(&self, texts: &[String]) -> Result<Vec<SentimentVerdict>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        // Clone Arc handles for the spawn_blocking closure ('static requirement)
        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let texts = texts.to_vec();
        let batch_size = self.batch_size;

        tokio::task::spawn_blocking(move || {
            let mut verdicts = Vec::with_capacity(texts.len());
            for chunk in texts.chunks(batch_size) {
                let logits = run_chunk(&session, &tokenizer, chunk)?;
                for row in logits.chunks(STAR_CLASSES) {
                    verdicts.push(verdict_from_logits(row));
                }
            }
            Ok(verdicts)
        })
        .await
        .context("spawn_blocking panicked")?
    }
}

/// Tokenize one chunk, run one forward pass, and return the flat
/// `[chunk_len × 5]` logits.
fn run_chunk(
    session: &Arc<Mutex<Session>>,
    tokenizer: &Tokenizer,
    chunk: &[String],
) -> Result<Vec<f32>> {
    let encodings: Vec<_> = chunk
        .iter()
        .map(|t| {
            tokenizer
                .encode(t.as_str(), true)
                .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
        })
        .collect::<Result<Vec<_>>>()?;

    let batch_size = encodings.len();
    let max_len = encodings.iter().map(|e| e.get_ids().len()).max().unwrap_or(0);

    // Flat input tensors, right-padded to max_len. Shape: [batch_size, max_len]
    let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
    let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
    let mut token_type_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

    for enc in &encodings {
        let ids = enc.get_ids();
        let mask = enc.get_attention_mask();
        let seq_len = ids.len();

        for &id in ids {
            input_ids_flat.push(id as i64);
        }
        for &m in mask {
            attention_mask_flat.push(m as i64);
        }
        // Single-segment input: token type is 0 everywhere
        token_type_flat.extend(std::iter::repeat(0).take(seq_len));

        // Pad to max_len (pad token id = 0 for BERT uncased)
        for _ in seq_len..max_len {
            input_ids_flat.push(0);
            attention_mask_flat.push(0);
            token_type_flat.push(0);
        }
    }

    let shape = [batch_size as i64, max_len as i64];

    let input_ids_tensor =
        Tensor::from_array((shape, input_ids_flat)).context("Failed to create input_ids tensor")?;
    let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat))
        .context("Failed to create attention_mask tensor")?;
    let token_type_tensor = Tensor::from_array((shape, token_type_flat))
        .context("Failed to create token_type_ids tensor")?;

    let mut session = session
        .lock()
        .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

    let outputs = session
        .run(ort::inputs! {
            "input_ids" => input_ids_tensor,
            "attention_mask" => attention_mask_tensor,
            "token_type_ids" => token_type_tensor
        })
        .context("ONNX inference failed")?;

    // Output shape: [batch_size, 5] — raw logits (pre-softmax)
    let (_out_shape, data) = outputs[0]
        .try_extract_tensor::<f32>()
        .context("Failed to extract output tensor")?;

    Ok(data.to_vec())
}

/// Convert one row of star logits into a verdict: softmax, then argmax.
fn verdict_from_logits(logits: &[f32]) -> SentimentVerdict {
    let probs = softmax(logits);
    let (best, confidence) = probs
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, p)| (i, *p))
        .unwrap_or((2, 0.0)); // unreachable for a 5-logit row; neutral guard

    debug!(
        stars = best + 1,
        confidence,
        "BERT scored review"
    );

    SentimentVerdict {
        star_rating: (best + 1) as u8,
        confidence,
    }
}

/// Numerically stable softmax: subtract the max logit before
/// exponentiating.
fn softmax(logits: &[f32]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max) as f64;
    let exps: Vec<f64> = logits.iter().map(|&l| (l as f64 - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
