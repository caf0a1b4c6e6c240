//! Application state for the field service.

use std::time::Instant;

use field_common::GridSpec;
use field_generator::{FieldLayout, SombreroField};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{info, warn};

use crate::config::ServerConfig;

/// Shared, read-only application state.
pub struct AppState {
    /// Configuration the server was started with.
    pub config: ServerConfig,

    /// Grid of the served field.
    pub grid: GridSpec,

    /// Layout description served at `/weather-data/metadata`.
    pub layout: FieldLayout,

    /// Prometheus handle, absent when no recorder was installed.
    pub prometheus: Option<PrometheusHandle>,

    pub started_at: Instant,
}

impl AppState {
    /// Build the state, evaluating the field once to describe its value range.
    pub fn new(config: ServerConfig) -> Self {
        let grid = GridSpec::sombrero();
        let stats = SombreroField::generate(&grid).stats();

        if stats.is_finite() {
            info!(
                width = grid.width(),
                height = grid.height(),
                min = stats.min,
                max = stats.max,
                mean = stats.mean,
                "Sombrero field self-check passed"
            );
        } else {
            warn!(
                non_finite = stats.non_finite,
                "Sombrero field contains non-finite samples"
            );
        }

        Self {
            config,
            grid,
            layout: FieldLayout::for_grid(&grid).with_stats(&stats),
            prometheus: None,
            started_at: Instant::now(),
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
