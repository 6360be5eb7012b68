// Colored terminal output for analysis results and the theme registry.
//
// This module owns all terminal-specific formatting: colors, bars,
// previews. The main.rs display paths delegate here.

use colored::Colorize;

use crate::model::AnalysisResult;
use crate::scoring::recommendation::Recommendation;
use crate::themes::vocabulary::ThemeVocabulary;

/// Display one analysis result.
pub fn display_analysis(result: &AnalysisResult, title: &str) {
    println!("\n{}", format!("=== Analysis: {title} ===").bold());
    println!();

    println!(
        "  Recommendation: {}",
        colorize_recommendation(result.recommendation)
    );
    println!(
        "  Compatibility:  {:.1}%",
        result.compatibility_score * 100.0
    );
    println!("  Reviews used:   {}", result.reviews_analyzed);

    if !result.theme_alignment.is_empty() {
        let themes: Vec<String> = result
            .theme_alignment
            .iter()
            .map(|t| t.replace('_', " "))
            .collect();
        println!("  Themes:         {}", themes.join(", "));
    }

    println!("\n  Sentiment:");
    let s = &result.sentiment_summary;
    print_bucket("positive", s.positive, |b| b.green());
    print_bucket("neutral", s.neutral, |b| b.yellow());
    print_bucket("negative", s.negative, |b| b.red());

    println!(
        "\n  {}",
        super::truncate_chars(&result.summary, 280).dimmed()
    );

    println!(
        "\n  Evaluated with: {} ({})",
        result.evaluation.model,
        result.evaluation.mode
    );
    if result.evaluation.mode == crate::sentiment::traits::EvaluationMode::Mock {
        println!(
            "  {}",
            "Sentiment model unavailable — percentages come from the lexicon fallback.".yellow()
        );
    }
    println!();
}

fn print_bucket(
    label: &str,
    percent: u32,
    color: impl Fn(colored::ColoredString) -> colored::ColoredString,
) {
    let bar_width: usize = 20;
    let filled = (percent as usize * bar_width) / 100;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));
    println!(
        "    {:<9} {} {:>3}%",
        label,
        color(bar.normal()),
        percent
    );
}

/// Display the theme registry — useful for checking which keywords
/// drive each theme before tuning a preference profile.
pub fn display_vocabulary() {
    let vocab = ThemeVocabulary::global();
    println!(
        "\n{}",
        format!("=== Theme Vocabulary ({} themes) ===", vocab.theme_count()).bold()
    );
    println!();

    for (i, entry) in vocab.entries().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, entry.name.replace('_', " ").bold());
        let keywords: Vec<String> = entry
            .keywords
            .iter()
            .map(|(term, weight)| format!("{term} ({weight:.1})"))
            .collect();
        println!("      {}", keywords.join(", ").dimmed());
    }
    println!();
}

/// Colorize a recommendation tier.
fn colorize_recommendation(tier: Recommendation) -> colored::ColoredString {
    let s = tier.as_str();
    match tier {
        Recommendation::HighlyLikely => s.green().bold(),
        Recommendation::WorthTrying => s.green(),
        Recommendation::ProceedWithCaution => s.yellow(),
        Recommendation::LikelyToDisappoint => s.red(),
    }
}
