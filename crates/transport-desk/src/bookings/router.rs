use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::loader::LoadError;
use super::service::BookingService;
use crate::error::AppError;

/// Router builder exposing the lookup and reload endpoints.
pub fn booking_router(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/api/v1/bookings/:code", get(lookup_handler))
        .route("/api/v1/dataset/reload", post(reload_handler))
        .with_state(service)
}

pub(crate) async fn lookup_handler(
    State(service): State<Arc<BookingService>>,
    Path(code): Path<String>,
) -> Response {
    // First lookup parses the sheet under the cache lock.
    let outcome = tokio::task::spawn_blocking(move || service.lookup(&code)).await;
    match outcome {
        Ok(Ok(outcome)) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Ok(Err(error)) => load_error_response(error),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn reload_handler(State(service): State<Arc<BookingService>>) -> Response {
    let reloaded = tokio::task::spawn_blocking(move || service.reload()).await;
    match reloaded {
        Ok(Ok(records)) => {
            (StatusCode::OK, axum::Json(json!({ "records": records }))).into_response()
        }
        Ok(Err(error)) => load_error_response(error),
        Err(error) => AppError::from(error).into_response(),
    }
}

fn load_error_response(error: LoadError) -> Response {
    warn!(%error, "bookings source unavailable");
    AppError::from(error).into_response()
}
