mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use assistant_config::ServerConfig;
use axum::body::Body;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    let missing = config.missing_assets();
    if missing.is_empty() {
        info!("Static files found in {}", config.static_dir.display());
    } else {
        warn!(
            "Missing static files in {}: {}",
            config.static_dir.display(),
            missing.join(", ")
        );
    }

    let state = Arc::new(AppState::new(&config));
    let app = build_router(state, &config);

    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assembles the unified HTTP surface: API routes, health endpoints, and the
/// static-file fallback, with open CORS and request tracing.
fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/status", get(handlers::status::status))
        .route(
            "/api/preferences",
            get(handlers::preferences::get_preferences).post(handlers::preferences::save_preferences),
        )
        .layer(trace_layer);

    let static_files =
        ServeDir::new(&config.static_dir).not_found_service(handlers::not_found.into_service());

    Router::new()
        .merge(api_routes)
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        .fallback_service(static_files)
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_config::ResponderMode;
    use assistant_router::KeywordRouter;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "no-such-dir".into(),
            mode: ResponderMode::Keyword,
            model: "gpt-4o-mini".to_string(),
            api_base: None,
            llm_timeout_secs: 1,
        };
        let state = Arc::new(AppState::with_responder(Arc::new(KeywordRouter::new())));
        build_router(state, &config)
    }

    #[tokio::test]
    async fn health_and_status_endpoints_respond_ok() {
        for uri in ["/", "/health", "/api/health", "/api/status"] {
            let response = test_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn chat_is_reachable_on_both_paths() {
        for uri in ["/chat", "/api/chat"] {
            let request = Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message": "hello"}"#))
                .unwrap();
            let response = test_app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn empty_chat_message_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message": "   "}"#))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unrouted_paths_fall_through_to_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/no-such-page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
