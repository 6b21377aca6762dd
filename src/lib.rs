//! # APOD
//!
//! Astronomy Picture of the Day viewer. Fetches one day's record from the
//! NASA APOD API and renders it as a loading, error, or loaded view.
//!
//! ## Modules
//!
//! - [`fetcher`]: Builds the request and fetches the record
//! - [`view`]: Page state and HTML/text rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apod::{render_text, ApodClient, Config, PageView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = ApodClient::new(config.apod)?;
//!
//!     let view = PageView::new();
//!     let state = view.initialize(&client).await;
//!     println!("{}", render_text(&state));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod fetcher;
pub mod logging;
pub mod view;

// Re-export top-level types for convenience
pub use fetcher::{ApodClient, DayRecord, DayRecordSource, FetchError, MediaType, FETCH_FAILED};

pub use view::{render_html, render_page, render_text, PageView, ViewState};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApodConfig, Config, ConfigError, LoggingConfig, ServerConfig};
