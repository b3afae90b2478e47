// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `serve`, `train`, `predict`
// and their flags. Every flag can also be set through a
// SPAM_FILTER_* environment variable, which is how container
// deployments configure the server.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::config::AppConfig;
use crate::data::csv_loader::UnrecognizedLabelPolicy;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Train a model from a CSV file (or the demo dataset) and save it
    Train(TrainArgs),

    /// Classify one message with the saved model
    Predict(PredictArgs),
}

/// Where the model lives. Shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Path of the trained model artifact
    #[arg(long, env = "SPAM_FILTER_MODEL_PATH", default_value = "model.json")]
    pub model_path: PathBuf,
}

/// How training data is read. Shared by `serve` and `train`.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path of the bundled demo CSV
    #[arg(long, env = "SPAM_FILTER_DEMO_PATH", default_value = "data/demo_dataset.csv")]
    pub demo_path: PathBuf,

    /// What to do with labels other than spam/1/true: "ham" treats
    /// them as ham, "skip" drops rows not labelled ham/0/false
    #[arg(long, env = "SPAM_FILTER_UNRECOGNIZED_LABELS", default_value = "ham")]
    pub unrecognized_labels: UnrecognizedLabelPolicy,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "SPAM_FILTER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "SPAM_FILTER_PORT", default_value_t = 5000)]
    pub port: u16,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// CSV file to train on; the demo dataset is used when omitted
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The message to classify
    #[arg(long)]
    pub message: String,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Convert CLI ServeArgs into the application-layer AppConfig.
impl From<ServeArgs> for AppConfig {
    fn from(a: ServeArgs) -> Self {
        AppConfig {
            host:                a.host,
            port:                a.port,
            model_path:          a.model.model_path,
            demo_path:           a.data.demo_path,
            unrecognized_labels: a.data.unrecognized_labels,
        }
    }
}

/// `train` never binds a socket, so host/port keep their defaults.
impl From<&TrainArgs> for AppConfig {
    fn from(a: &TrainArgs) -> Self {
        AppConfig {
            model_path:          a.model.model_path.clone(),
            demo_path:           a.data.demo_path.clone(),
            unrecognized_labels: a.data.unrecognized_labels,
            ..AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["spam-filter", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let config = AppConfig::from(args);
        assert_eq!(config.port, 5000);
        assert_eq!(config.model_path, PathBuf::from("model.json"));
        assert_eq!(config.unrecognized_labels, UnrecognizedLabelPolicy::Ham);
    }

    #[test]
    fn test_train_flags() {
        let cli = Cli::try_parse_from([
            "spam-filter",
            "train",
            "--csv",
            "sms.csv",
            "--model-path",
            "out/model.json",
            "--unrecognized-labels",
            "skip",
        ])
        .unwrap();
        let Commands::Train(args) = cli.command else {
            panic!("expected train");
        };
        assert_eq!(args.csv, Some(PathBuf::from("sms.csv")));

        let config = AppConfig::from(&args);
        assert_eq!(config.model_path, PathBuf::from("out/model.json"));
        assert_eq!(config.unrecognized_labels, UnrecognizedLabelPolicy::Skip);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let result = Cli::try_parse_from(["spam-filter", "serve", "--unrecognized-labels", "maybe"]);
        assert!(result.is_err());
    }
}
