use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

/// Palate: review compatibility analysis for movies, TV, and games.
///
/// Scores scraped third-party reviews against your stored taste profile
/// and produces a tiered recommendation with supporting evidence.
#[derive(Parser)]
#[command(name = "palate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch of scraped reviews against a preference profile
    Analyze {
        /// Path to a JSON array of raw reviews (scraper output)
        #[arg(long)]
        reviews: PathBuf,

        /// Path to the user preference profile JSON
        #[arg(long)]
        profile: PathBuf,

        /// Title shown in the terminal report
        #[arg(long, default_value = "untitled")]
        title: String,

        /// Print the raw AnalysisResult JSON instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Download the ONNX sentiment model (~170 MB)
    DownloadModel,

    /// Show the theme vocabulary used for extraction
    Vocab,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("palate=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            reviews,
            profile,
            title,
            json,
        } => {
            let config = palate::config::Config::load();

            let raw_reviews: Vec<palate::model::RawReview> = read_json(&reviews)
                .with_context(|| format!("Failed to read reviews from {}", reviews.display()))?;
            let profile: palate::model::UserPreferenceProfile = read_json(&profile)
                .with_context(|| format!("Failed to read profile from {}", profile.display()))?;

            info!(reviews = raw_reviews.len(), "Loaded scraped review batch");

            // Backend selection happens exactly once, before any request
            let oracle = palate::sentiment::select_oracle(&config);
            let analyzer = palate::pipeline::Analyzer::new(config, oracle)?;

            let result = analyzer.analyze(&raw_reviews, &profile).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                palate::output::terminal::display_analysis(&result, &title);
            }
        }

        Commands::DownloadModel => {
            let config = palate::config::Config::load();

            println!("Downloading ONNX sentiment model...");
            println!("  Destination: {}", config.model_dir.display());

            palate::sentiment::download::download_model(&config.model_dir).await?;

            println!("\nModel downloaded successfully.");
            println!("You can now run `palate analyze` with model-backed sentiment.");
        }

        Commands::Vocab => {
            palate::output::terminal::display_vocabulary();
        }
    }

    Ok(())
}

/// Read and deserialize a JSON file.
fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
