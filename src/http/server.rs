//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, metrics, limits, timeout)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::ApiConfig;
use crate::http::error::not_found;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::Shutdown;
use crate::observability::{metrics::track_metrics, spans::request_span};
use crate::sheet::SheetWriter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<SheetWriter>,
}

impl AppState {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            sheets: Arc::new(SheetWriter::new(&config.sheet)),
        }
    }
}

/// HTTP server for the API.
pub struct HttpServer {
    router: Router,
    config: ApiConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added later wrap earlier ones, so the request id is set first
    /// and the trace span can read it.
    #[allow(deprecated)]
    fn build_router(config: &ApiConfig, state: AppState) -> Router {
        let router = api::routes()
            .fallback(not_found)
            .with_state(state)
            .layer(middleware::from_fn(track_metrics))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size));

        let router = if config.timeouts.request_secs > 0 {
            router.layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
        } else {
            router
        };

        router
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// A clone of the fully layered router, for driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain.
    ///
    /// Returns promptly if `shutdown` was already triggered.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            output_dir = %self.config.sheet.output_dir,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        HttpServer::new(ApiConfig::default())
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let resp = server()
            .router()
            .oneshot(Request::get("/add?x=1&y=2").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
        assert_eq!(body_json(resp).await["result"], 3);
    }

    #[tokio::test]
    async fn test_client_request_id_is_propagated() {
        let resp = server()
            .router()
            .oneshot(
                Request::get("/multiply/2/3")
                    .header("x-request-id", "trace-me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.headers()["x-request-id"], "trace-me");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let resp = server()
            .router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["detail"], "Not Found");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let mut config = ApiConfig::default();
        config.security.max_body_size = 16;
        let resp = HttpServer::new(config)
            .router()
            .oneshot(
                Request::post("/user")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"Ann","age":30,"address":"X","friend_names":[]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_run_returns_when_shutdown_already_triggered() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let shutdown = Shutdown::new();
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(5), server().run(listener, shutdown))
            .await
            .expect("server should stop on an earlier trigger")
            .unwrap();
    }
}
