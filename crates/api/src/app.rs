use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::TelemetryService;
use persistence::repositories::{AlertRepository, ReadingRepository};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_ingest_role, security_headers_middleware,
    trace_id,
};
use crate::routes::{health, telemetry};
use crate::services::{PassportClient, PassportError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub telemetry: TelemetryService,
}

/// Wires the PostgreSQL stores and the passport client into the router.
pub fn create_app(config: Config, pool: PgPool) -> Result<Router, PassportError> {
    let passport = PassportClient::new(&config.passport)?;
    let telemetry = TelemetryService::new(
        Arc::new(ReadingRepository::new(pool.clone())),
        Arc::new(AlertRepository::new(pool)),
        Arc::new(passport),
    );

    Ok(create_router(AppState {
        config: Arc::new(config),
        telemetry,
    }))
}

/// Builds the router over an already assembled state.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Write route, gated on the caller's role
    let ingest_routes = Router::new()
        .route("/api/v1/telemetry", post(telemetry::ingest_telemetry))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_ingest_role,
        ));

    let query_routes = Router::new()
        .route("/api/v1/telemetry/:batch_id", get(telemetry::get_readings))
        .route(
            "/api/v1/telemetry/:batch_id/alerts",
            get(telemetry::get_alerts),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(ingest_routes)
        .merge(query_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
