//! APOD HTTP Server
//!
//! Serves the rendered page and the raw record, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Today's picture, rendered server-side
//!
//! ## API
//! - `GET /api/v1/apod` - Today's record as JSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use apod::api::{serve, AppState};
//! use apod::config::Config;
//! use apod::fetcher::ApodClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let client = Arc::new(ApodClient::new(config.apod.clone())?);
//!
//!     let state = AppState::new(client, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/apod", get(routes::record::get_record));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured frontend origins, GET only
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("APOD viewer listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("APOD viewer shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::{moon, FixedSource};
    use crate::fetcher::{DayRecord, MediaType};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app(source: FixedSource) -> (Router, Arc<FixedSource>) {
        let source = Arc::new(source);
        let state = AppState::new(source.clone(), ServerConfig::default());
        (build_router(state), source)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_record() {
        let (app, source) = create_test_app(FixedSource::ok(moon()));

        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = body_string(response).await;
        assert!(body.contains(r#"<h1 class="text-2xl font-bold mb-4">Moon</h1>"#));
        assert!(body.contains("<img "));
        assert!(body.contains("Date: 2024-01-01"));
        assert!(!body.contains("Loading..."));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_index_renders_generic_error() {
        let (app, _source) = create_test_app(FixedSource::failing());

        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains(">Failed to fetch data</div>"));
        assert!(!body.contains("Service Unavailable"));
        assert!(!body.contains("<h1"));
    }

    #[tokio::test]
    async fn test_index_renders_interactive_day() {
        let record = DayRecord {
            title: "Interactive".to_string(),
            media_type: MediaType::Other,
            url: String::new(),
            ..moon()
        };
        let (app, _source) = create_test_app(FixedSource::ok(record));

        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains(">Interactive</h1>"));
        assert!(body.contains("Date: 2024-01-01"));
        assert!(!body.contains("Failed to fetch data"));
        assert!(!body.contains("<img"));
        assert!(!body.contains("<iframe"));
    }

    #[tokio::test]
    async fn test_each_page_view_fetches() {
        let (app, source) = create_test_app(FixedSource::ok(moon()));

        send_get(app.clone(), "/").await;
        send_get(app, "/").await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_record_json() {
        let (app, _source) = create_test_app(FixedSource::ok(moon()));

        let response = send_get(app, "/api/v1/apod").await;
        assert_eq!(response.status(), StatusCode::OK);

        let record: DayRecord = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(record, moon());
    }

    #[tokio::test]
    async fn test_record_upstream_failure() {
        let (app, _source) = create_test_app(FixedSource::failing());

        let response = send_get(app, "/api/v1/apod").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "UPSTREAM_HTTP_STATUS");
        assert_eq!(body["error"]["message"], "Failed to fetch data");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_health() {
        let (app, source) = create_test_app(FixedSource::ok(moon()));

        let response = send_get(app.clone(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["endpoint"], "fixed://apod");
        // Health never touches the provider
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _source) = create_test_app(FixedSource::ok(moon()));

        let response = send_get(app, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
