//! Prometheus metrics for the field service.

use std::time::Duration;

use field_common::{FieldError, FieldResult};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder. Call once at startup.
pub fn install_prometheus() -> FieldResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| FieldError::Internal(format!("failed to install Prometheus recorder: {}", e)))
}

/// Record a successfully served field buffer.
pub fn record_field_served(bytes: usize, elapsed: Duration) {
    counter!("field_requests_total").increment(1);
    counter!("field_bytes_served_total").increment(bytes as u64);
    histogram!("field_generate_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
}

/// Record a failed field request.
pub fn record_field_error() {
    counter!("field_errors_total").increment(1);
}
