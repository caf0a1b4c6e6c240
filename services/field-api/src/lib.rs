//! Sombrero field service library.
//!
//! Serves a synthetic 1000×1000 float32 field as a raw little-endian
//! buffer at `GET /weather-data`, plus metadata, health and metrics routes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod state;

pub use config::{CorsConfig, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
