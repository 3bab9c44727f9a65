//! HTTP surface of the checker daemon.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use hosting_core::api::{CheckRequest, CheckResponse, WebhookPayload};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::service::{render_comment, CheckError, HostingChecker};

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CheckError> for ApiError {
    fn from(e: CheckError) -> Self {
        match e {
            // A key we cannot fetch is the caller's problem, not ours.
            CheckError::FetchIssue { .. } => ApiError::BadRequest(e.to_string()),
            CheckError::Other(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (code, msg) = match self {
            ApiError::BadRequest(m) => (axum::http::StatusCode::BAD_REQUEST, m),
            ApiError::Internal(m) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (code, msg).into_response()
    }
}

/// Builds the daemon router.
pub fn router(checker: Arc<HostingChecker>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/v1/webhook", post(webhook))
        .route("/v1/check", post(check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(checker)
}

async fn health() -> &'static str {
    "ok"
}

/// Issue-tracker webhook: run the checks and comment on the issue.
async fn webhook(
    State(checker): State<Arc<HostingChecker>>,
    Json(payload): Json<WebhookPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !payload.is_check_event() {
        return Err(ApiError::BadRequest(format!(
            "unsupported webhook event '{}'",
            payload.webhook_event.as_deref().unwrap_or("<missing>")
        )));
    }
    let Some(issue) = payload.issue else {
        return Err(ApiError::BadRequest("webhook carries no issue".to_string()));
    };

    info!(issue = %issue.key, "webhook received");
    checker.process_issue(&issue.key).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Operator-triggered check: render the report without commenting.
async fn check(
    State(checker): State<Arc<HostingChecker>>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let findings = checker.check_issue(&req.issue_key).await?;
    Ok(Json(CheckResponse {
        issue_key: req.issue_key,
        findings: findings.len(),
        report: render_comment(&findings),
    }))
}
