//! APOD CLI
//!
//! Command-line interface for the APOD viewer:
//! - Show today's picture as text, HTML or JSON
//! - Generate a default config file

use anyhow::Context;
use apod::config::{generate_default_config, Config, LoadReport};
use apod::fetcher::ApodClient;
use apod::logging::LogTarget;
use apod::view::{render_html, render_page, render_text, PageView, ViewState};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apod-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Astronomy Picture of the Day in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(long = "config", global = true)]
    pub config_path: Option<PathBuf>,

    /// Provider access key, overrides config and APOD_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and show today's picture
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// With --format html, emit a complete document instead of a fragment
        #[arg(long)]
        page: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { format, page } => {
            let (mut config, report) = match cli.config_path {
                Some(path) => (Config::load_with_env(&path)?, LoadReport::file(path)),
                None => Config::load_default()?,
            };
            if let Some(api_key) = cli.api_key {
                config.apod.api_key = api_key;
            }

            // Logs go to stderr so stdout stays pipeable
            apod::logging::init(&config.logging, LogTarget::Stderr)?;
            report.log();

            let client = ApodClient::new(config.apod).context("Failed to create HTTP client")?;
            let view = PageView::new();

            eprintln!("{}", render_text(&view.state()));
            let state = view.initialize(&client).await;

            println!("{}", render(&state, format, page)?);

            if let Some(e) = view.failure() {
                tracing::debug!(kind = e.kind(), "Exiting after failed fetch");
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Config written to {}", path.display());
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

/// Render a settled view in the requested format
fn render(state: &ViewState<'_>, format: OutputFormat, page: bool) -> anyhow::Result<String> {
    let rendered = match (format, state) {
        (OutputFormat::Text, _) => render_text(state),
        (OutputFormat::Html, _) if page => render_page(state),
        (OutputFormat::Html, _) => render_html(state),
        (OutputFormat::Json, ViewState::Loaded(record)) => serde_json::to_string_pretty(record)?,
        (OutputFormat::Json, ViewState::Errored(message)) => {
            serde_json::to_string_pretty(&serde_json::json!({ "error": message }))?
        }
        (OutputFormat::Json, ViewState::Loading) => {
            serde_json::to_string_pretty(&serde_json::json!({ "loading": true }))?
        }
    };
    Ok(rendered)
}
