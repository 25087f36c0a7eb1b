//! Solace insights demo
//!
//! Runs the analysis pipeline over a deterministic month of synthetic
//! check-in data and prints the resulting insights.

use chrono::{Datelike, Duration, Utc, Weekday};
use clap::Parser;
use solace_insights::analysis::InsightEngine;
use solace_insights::config::Config;
use solace_insights::model::{IntelligentInsights, JournalEntry, SymptomLog, SymptomType};
use solace_insights::source::MemorySource;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solace-insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pattern and correlation analysis over symptom check-in history")]
struct Cli {
    /// User to analyze
    #[arg(long, default_value = "demo")]
    user: String,

    /// Lookback window in days (default: from config)
    #[arg(long)]
    days: Option<u32>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full insights JSON to stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("solace_insights={}", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Solace insights engine v{}", env!("CARGO_PKG_VERSION"));

    let days = cli.days.unwrap_or(config.analysis.lookback_days);

    let mut source = MemorySource::new();
    seed_demo_data(&mut source, &cli.user);

    let engine = InsightEngine::new(Arc::new(source));
    let insights = engine.analyze_user(&cli.user, days).await;

    report(&insights);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    }

    Ok(())
}

/// Seed a deterministic month of check-ins:
/// - anxiety stepping up 2 -> 5 while energy falls 4 -> 1
/// - hot flashes spiking on Mondays
/// - journal entries with mood inverse to anxiety, every other day
fn seed_demo_data(source: &mut MemorySource, user: &str) {
    let today = Utc::now().date_naive();

    for i in 0..28i64 {
        let date = today - Duration::days(27 - i);
        let anxiety = (2 + i / 7) as u8; // 2..5 over four weeks
        let energy = 6 - anxiety; // 4..1, inverse
        let hot_flashes = if date.weekday() == Weekday::Mon { 5 } else { 2 };

        source.push_log(
            SymptomLog::new(user, date)
                .symptom(SymptomType::Anxiety, anxiety)
                .symptom(SymptomType::HotFlashes, hot_flashes)
                .energy(energy),
        );

        if i % 2 == 0 {
            let mood = (6 - anxiety).min(4); // 4..1, inverse to anxiety
            source.push_entry(
                JournalEntry::new(user, date, format!("Day {} check-in", i + 1)).mood(mood),
            );
        }
    }

    tracing::info!(user, days = 28, "Seeded demo history");
}

fn report(insights: &IntelligentInsights) {
    let summary = &insights.summary;
    tracing::info!(
        days_tracked = summary.total_days_tracked,
        most_frequent = ?summary.most_frequent_symptom,
        average_severity = format!("{:.1}", summary.average_severity).as_str(),
        trend = ?summary.trend_direction,
        "Summary"
    );

    for pattern in &insights.patterns {
        tracing::info!(
            confidence = ?pattern.confidence,
            "Pattern: {}",
            pattern.description
        );
    }

    for correlation in &insights.correlations {
        tracing::info!(
            r = format!("{:.2}", correlation.strength).as_str(),
            samples = correlation.sample_size,
            "Correlation: {}",
            correlation.description
        );
    }

    for recommendation in &insights.recommendations {
        tracing::info!(
            priority = ?recommendation.priority,
            category = ?recommendation.category,
            "Recommendation: {} - {}",
            recommendation.title,
            recommendation.action
        );
    }
}
