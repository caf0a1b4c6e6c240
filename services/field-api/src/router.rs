//! Router assembly.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use field_common::FieldResult;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the HTTP router from explicit state.
///
/// Fails when the configured CORS policy is invalid.
pub fn build_router(state: Arc<AppState>) -> FieldResult<Router> {
    let cors = state.config.cors.build_layer()?;

    Ok(Router::new()
        // Field data
        .route(
            "/weather-data",
            get(handlers::field::weather_data_handler),
        )
        .route(
            "/weather-data/metadata",
            get(handlers::field::metadata_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
