//! Tests of the HTTP limits resolver against a local stub passport service.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use domain::models::{BatchLimits, LimitsResolution};
use domain::services::LimitsResolver;
use iot_service_api::config::PassportConfig;
use iot_service_api::services::{PassportClient, PassportError};
use serde_json::json;
use uuid::Uuid;

const FROZEN: &str = "11111111-1111-1111-1111-111111111111";
const MALFORMED: &str = "22222222-2222-2222-2222-222222222222";
const NULL_BOUND: &str = "33333333-3333-3333-3333-333333333333";
const SLOW: &str = "44444444-4444-4444-4444-444444444444";
const SERVER_ERROR: &str = "55555555-5555-5555-5555-555555555555";

async fn batch(Path(batch_id): Path<String>) -> impl IntoResponse {
    match batch_id.as_str() {
        FROZEN => (
            StatusCode::OK,
            Json(json!({
                "id": FROZEN,
                "product_name": "Frozen berries",
                "min_temp": -25.0,
                "max_temp": -18.0,
            })),
        )
            .into_response(),
        MALFORMED => (StatusCode::OK, "<html>oops</html>").into_response(),
        NULL_BOUND => (
            StatusCode::OK,
            Json(json!({"min_temp": null, "max_temp": 4.0})),
        )
            .into_response(),
        SLOW => {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({"min_temp": 0.0, "max_temp": 4.0})).into_response()
        }
        SERVER_ERROR => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts the stub on an ephemeral port and returns its API base URL.
async fn start_stub() -> String {
    let app = Router::new().route("/api/v1/batches/:batch_id", get(batch));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

fn client(url: &str, timeout_ms: u64) -> PassportClient {
    PassportClient::new(&PassportConfig {
        url: url.to_string(),
        timeout_ms,
    })
    .unwrap()
}

fn id(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

#[tokio::test]
async fn test_resolves_limits() {
    let url = start_stub().await;

    let resolution = client(&url, 2000).resolve(id(FROZEN)).await;

    assert_eq!(
        resolution,
        LimitsResolution::Resolved(BatchLimits {
            min_temp: -25.0,
            max_temp: -18.0
        })
    );
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let url = format!("{}/", start_stub().await);

    let resolution = client(&url, 2000).resolve(id(FROZEN)).await;
    assert!(resolution.is_resolved());
}

#[tokio::test]
async fn test_unknown_batch_is_unavailable() {
    let url = start_stub().await;
    let passport = client(&url, 2000);

    let err = passport.fetch_limits(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, PassportError::Status(s) if s == StatusCode::NOT_FOUND));

    let resolution = passport.resolve(Uuid::new_v4()).await;
    assert!(matches!(resolution, LimitsResolution::Unavailable(ref r) if r.contains("404")));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let url = start_stub().await;

    let resolution = client(&url, 2000).resolve(id(SERVER_ERROR)).await;
    assert!(matches!(resolution, LimitsResolution::Unavailable(ref r) if r.contains("500")));
}

#[tokio::test]
async fn test_malformed_body_is_unavailable() {
    let url = start_stub().await;

    let err = client(&url, 2000).fetch_limits(id(MALFORMED)).await.unwrap_err();
    assert!(matches!(err, PassportError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_null_bound_is_unavailable() {
    let url = start_stub().await;

    let err = client(&url, 2000).fetch_limits(id(NULL_BOUND)).await.unwrap_err();
    assert!(matches!(err, PassportError::MissingLimits(batch) if batch == id(NULL_BOUND)));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let url = start_stub().await;

    let err = client(&url, 100).fetch_limits(id(SLOW)).await.unwrap_err();
    assert!(matches!(err, PassportError::Timeout(100)));

    let resolution = client(&url, 100).resolve(id(SLOW)).await;
    assert!(!resolution.is_resolved());
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    let passport = client(&format!("http://{}/api/v1", addr), 2000);

    let err = passport.fetch_limits(id(FROZEN)).await.unwrap_err();
    assert!(matches!(err, PassportError::Http(_)));
    assert!(!passport.resolve(id(FROZEN)).await.is_resolved());
}
