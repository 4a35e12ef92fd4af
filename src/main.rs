//! FitBuddy - Fitness & Nutrition Recommendation Engine
//!
//! Command-line entry point: reads body metrics from flags, trains the
//! model and prints the personalized plan.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitbuddy::config;
use fitbuddy::profile::{ActivityLevel, DietPreference, UserMetrics};
use fitbuddy::recommend::{RecommendationBundle, RecommendationEngine};

#[derive(Parser)]
#[command(
    name = "fitbuddy",
    about = "Personalized fitness and nutrition recommendations",
    version
)]
struct Args {
    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f32,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f32,

    /// Activity level ("Sedentary" through "Extremely Active")
    #[arg(long)]
    activity: String,

    /// Diet preference: veg, non-veg or vegan
    #[arg(long)]
    diet: String,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full recommendation as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    tracing::info!("Starting FitBuddy v{}", env!("CARGO_PKG_VERSION"));

    let mut engine_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;
    if args.seed.is_some() {
        engine_config.seed = args.seed;
    }

    let metrics = UserMetrics::new(
        args.weight_kg,
        args.height_cm,
        ActivityLevel::from_label(&args.activity),
        DietPreference::from_label(&args.diet),
    );
    metrics
        .validate()
        .context("Please fill in all fields with valid values.")?;

    let mut engine = RecommendationEngine::new(engine_config);
    tracing::debug!(
        epochs = engine.config().epochs,
        learning_rate = engine.config().learning_rate,
        seed = ?engine.config().seed,
        retrain = %engine.config().retrain,
        "engine configured"
    );

    let show_progress = !args.json;
    let bundle = engine
        .recommend_with_progress(&metrics, |progress| {
            if show_progress && progress.percent % 10 == 0 {
                println!("Training Personal Model... {}%", progress.percent);
            }
        })
        .context("Failed to generate plan. Please try again.")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        print_plan(&bundle);
    }

    Ok(())
}

fn print_plan(bundle: &RecommendationBundle) {
    println!();
    println!("Personal Analysis");
    println!("  BMI: {:.1} ({})", bundle.bmi, bundle.bmi_category.label());
    println!(
        "  Estimated Daily Needs: {} kcal",
        bundle.prediction.calories
    );
    println!();
    println!(
        "Training Plan (Intensity: {}/10)",
        bundle.prediction.intensity
    );
    for item in &bundle.workout.items {
        println!("  - {}", item);
    }
    println!();
    println!("Nutrition Strategy");
    println!(
        "  Target Macros: Protein: {}g | Carbs: {}g | Fats: {}g",
        bundle.nutrition.macros.protein_g,
        bundle.nutrition.macros.carb_g,
        bundle.nutrition.macros.fat_g
    );
    for tip in &bundle.nutrition.tips {
        println!("  - {}", tip);
    }
}
