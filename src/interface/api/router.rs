//! API Router configuration

use super::calls_handler::{call_status, health_check, make_call, AppState};
use super::error::method_not_allowed;
use super::metrics_handler::{metrics_handler, track_http_metrics};
use super::webhook_handler::{call_webhook, WEBHOOK_BODY_LIMIT};
use crate::application::CALL_WEBHOOK_PATH;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the API router.
///
/// `/metrics` is mounted only when a Prometheus handle is supplied.
pub fn build_router(state: AppState, prometheus_handle: Option<PrometheusHandle>) -> Router {
    // Health check route
    let health_routes = Router::new().route("/health", get(health_check));

    // Call routes; unsupported verbs get a JSON 405
    let call_routes = Router::new()
        .route(
            "/api/make-call",
            post(make_call).fallback(method_not_allowed),
        )
        .route(
            "/api/call-status",
            get(call_status).fallback(method_not_allowed),
        )
        .route(
            CALL_WEBHOOK_PATH,
            post(call_webhook)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(WEBHOOK_BODY_LIMIT)),
        );

    let mut router = Router::new()
        .merge(health_routes)
        .merge(call_routes)
        .with_state(state);

    if let Some(handle) = prometheus_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics_handler))
                .with_state(handle),
        );
    }

    router
        .route_layer(middleware::from_fn(track_http_metrics))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
