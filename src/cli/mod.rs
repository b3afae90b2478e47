// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments
// with clap and delegates to Layer 2 (application) or to the
// HTTP server.
//
// Three commands are supported:
//   1. `serve`   - runs the HTTP API and UI
//   2. `train`   - trains from a CSV file and saves the model
//   3. `predict` - classifies one message with the saved model
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, PredictArgs, ServeArgs, TrainArgs};

use crate::application::config::AppConfig;
use crate::infra::model_store::FileModelStore;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "spam-filter",
    version,
    about = "Train a TF-IDF + Naive Bayes spam classifier and serve predictions over HTTP."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)   => run_serve(args),
            Commands::Train(args)   => run_train(args),
            Commands::Predict(args) => run_predict(args),
        }
    }
}

/// Handles the `serve` subcommand.
fn run_serve(args: ServeArgs) -> Result<()> {
    let config: AppConfig = args.into();
    tracing::info!("Starting server with config {}", serde_json::to_string(&config)?);

    let runtime = tokio::runtime::Runtime::new().context("Cannot start tokio runtime")?;
    runtime.block_on(crate::http::serve(&config))
}

/// Handles the `train` subcommand.
fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;
    use crate::data::csv_loader::{CsvBytes, DemoDataset};

    let config = AppConfig::from(&args);
    let store = Arc::new(FileModelStore::new(config.model_path.clone()));
    let use_case = TrainUseCase::new(store);

    let report = match &args.csv {
        Some(path) => {
            tracing::info!("Training on '{}'", path.display());
            let bytes = fs::read(path)
                .with_context(|| format!("Cannot read CSV '{}'", path.display()))?;
            use_case.execute(&CsvBytes::new(bytes, config.normalizer()))?
        }
        None => {
            tracing::info!("Training on demo dataset '{}'", config.demo_path.display());
            use_case.execute(&DemoDataset::new(config.demo_path.clone(), config.normalizer()))?
        }
    };

    println!(
        "Training complete. Samples used: {} ({} spam), vocabulary: {} terms. Model saved to '{}'.",
        report.samples,
        report.spam_samples,
        report.vocabulary_size,
        config.model_path.display()
    );
    Ok(())
}

/// Handles the `predict` subcommand.
fn run_predict(args: PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;

    let store = Arc::new(FileModelStore::new(args.model.model_path));
    let label = PredictUseCase::new(store).predict(&args.message)?;

    println!("Prediction: {label}");
    Ok(())
}
