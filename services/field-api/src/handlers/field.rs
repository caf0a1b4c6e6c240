//! Field data handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Extension,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use field_common::FieldError;
use field_generator::{produce_field_bytes, FieldLayout};
use tracing::{error, info};

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// GET /weather-data - Raw little-endian float32 sombrero field
///
/// The field is regenerated for every request on the blocking pool.
pub async fn weather_data_handler() -> Result<Response, ApiError> {
    let start = Instant::now();

    let bytes = tokio::task::spawn_blocking(produce_field_bytes)
        .await
        .map_err(|e| {
            error!(error = %e, "Field generation task failed");
            metrics::record_field_error();
            FieldError::Internal(format!("field generation task failed: {}", e))
        })?;

    let elapsed = start.elapsed();
    metrics::record_field_served(bytes.len(), elapsed);
    info!(
        bytes = bytes.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Served weather data"
    );

    Ok(([(header::CONTENT_TYPE, OCTET_STREAM)], bytes).into_response())
}

/// GET /weather-data/metadata - Layout of the buffer served at /weather-data
pub async fn metadata_handler(Extension(state): Extension<Arc<AppState>>) -> Json<FieldLayout> {
    Json(state.layout.clone())
}
