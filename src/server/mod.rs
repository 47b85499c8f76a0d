//! HTTP boundary: `POST /api/query` and `GET /health`.

pub mod config;

use std::any::Any;

use axum::{
    Router,
    body::Bytes,
    http::{Request, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::synth;

pub use config::ServerConfig;

#[derive(Debug, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<Value>,
}

impl QueryRequest {
    /// Query text to synthesize from. A missing, `null`, `false`, `0` or empty `query`
    /// reads as the empty query; any other non-string value cannot be synthesized.
    pub fn query_text(&self) -> Result<&str, ApiError> {
        match &self.query {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(""),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(""),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => {
                error!(query = %other, "Query is not a string");
                Err(ApiError::Synthesis)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Failed to synthesize data")]
    Synthesis,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Synthesis => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<crate::Error> for ApiError {
    fn from(e: crate::Error) -> Self {
        error!(error = %e, "Failed to build response");
        ApiError::Synthesis
    }
}

/// Application router with CORS, tracing and panic recovery applied.
pub fn router() -> Router {
    with_layers(
        Router::new()
            .route("/api/query", post(api_query))
            .route("/health", get(health)),
    )
}

/// Wrap routes in the middleware stack shared by every endpoint.
pub fn with_layers(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

async fn api_query(body: Bytes) -> Result<Response, ApiError> {
    let request = parse_body(&body)?;
    let collection = synth::synthesize(request.query_text()?);
    let payload = serde_json::to_vec(&collection).map_err(crate::Error::from)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// An empty body reads as `{}`.
fn parse_body(body: &[u8]) -> Result<QueryRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(QueryRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Rejected request body");
        ApiError::InvalidBody
    })
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Request handler panicked");
    ApiError::Synthesis.into_response()
}
