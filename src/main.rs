#![allow(dead_code)]

mod application;
mod cli;
mod data;
mod domain;
mod http;
mod infra;
mod ml;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spam_filter=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
