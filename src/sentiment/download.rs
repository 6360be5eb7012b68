// Model download helper for the ONNX sentiment classifier.
//
// Fetches the quantized nlptown/bert-base-multilingual-uncased-sentiment
// export (~170 MB) plus its tokenizer from HuggingFace. Files are stored
// in a platform-appropriate directory (~/.local/share/palate/models/ on
// Linux) so they persist across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// HuggingFace repo hosting the ONNX export of the sentiment model.
const SENTIMENT_HF_URL: &str =
    "https://huggingface.co/onnx-community/bert-base-multilingual-uncased-sentiment-ONNX/resolve/main";

const MODEL_FILE: &str = "model_quantized.onnx";
const MODEL_REMOTE_PATH: &str = "onnx/model_quantized.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";

/// Returns the default directory for storing model files.
/// Uses the platform data directory: ~/.local/share/palate/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palate")
        .join("models")
}

/// Check whether both required model files exist.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join(MODEL_FILE).exists() && dir.join(TOKENIZER_FILE).exists()
}

/// Download the sentiment model files.
///
/// Shows a progress bar for the large model file. Skips files that
/// already exist. Creates directories as needed.
pub async fn download_model(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    println!("\nSentiment model (bert-base-multilingual-uncased-sentiment):");

    let tokenizer_path = dir.join(TOKENIZER_FILE);
    if tokenizer_path.exists() {
        info!("Tokenizer already exists, skipping");
        println!("  {TOKENIZER_FILE} (already exists)");
    } else {
        println!("  Downloading {TOKENIZER_FILE}...");
        download_file(
            &format!("{SENTIMENT_HF_URL}/{TOKENIZER_FILE}"),
            &tokenizer_path,
            false,
        )
        .await?;
    }

    let model_path = dir.join(MODEL_FILE);
    if model_path.exists() {
        info!("Model already exists, skipping");
        println!("  {MODEL_FILE} (already exists)");
    } else {
        println!("  Downloading {MODEL_FILE} (~170 MB)...");
        download_file(
            &format!("{SENTIMENT_HF_URL}/{MODEL_REMOTE_PATH}"),
            &model_path,
            true,
        )
        .await?;
    }

    Ok(())
}

/// Download a single file from a URL to a local path.
/// If `show_progress` is true, display a progress bar.
async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let total_size = response.content_length();

    let pb = if show_progress {
        let pb = if let Some(size) = total_size {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        };
        Some(pb)
    } else {
        None
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    if let Some(ref pb) = pb {
        pb.set_position(bytes.len() as u64);
    }

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_dir_is_under_palate() {
        let dir = default_model_dir();
        let path_str = dir.to_string_lossy();
        assert!(
            path_str.contains("palate") && path_str.contains("models"),
            "Expected path containing palate/models, got: {path_str}"
        );
    }

    #[test]
    fn model_files_present_false_when_empty() {
        let dir = std::env::temp_dir().join("palate-test-nonexistent");
        assert!(!model_files_present(&dir));
    }

    #[test]
    fn model_files_present_true_when_files_exist() {
        let dir = std::env::temp_dir().join("palate-download-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(MODEL_FILE), b"fake").unwrap();
        std::fs::write(dir.join(TOKENIZER_FILE), b"fake").unwrap();

        assert!(model_files_present(&dir));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
