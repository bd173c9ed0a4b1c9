use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use quizzical::trivia::TriviaClient;
use quizzical::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quizzical")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Trivia endpoint to fetch questions from (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Write logs to this file instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Route tracing output to a file; stdout belongs to the TUI
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizzical=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = match cli.log_file {
        Some(path) => path,
        None => Config::log_path()?,
    };
    init_logging(&log_path)?;

    let mut config = Config::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let client = TriviaClient::new(&config.api_url)
        .with_context(|| format!("Cannot use trivia endpoint {}", config.api_url))?;
    tracing::info!("Starting quizzical against {}", config.api_url);

    let mut app = App::new(config, client)?;
    app.run().await?;

    Ok(())
}
