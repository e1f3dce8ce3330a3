//! Metrics collection for email-generator-service.
//!
//! HTTP request metrics come from the shared middleware; this module adds
//! generation-specific counters and exposes the Prometheus rendering.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

use crate::services::providers::ProviderError;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once at startup.
pub fn init_metrics() -> Result<(), String> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("failed to install Prometheus recorder: {}", e))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| "failed to set metrics handle: already initialized".to_string())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record the outcome of one generation call.
pub fn record_generation(
    provider: &'static str,
    result: &Result<String, ProviderError>,
    elapsed: Duration,
) {
    let status = match result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };

    counter!(
        "email_generation_requests_total",
        "provider" => provider,
        "status" => status
    )
    .increment(1);
    histogram!("email_generation_duration_seconds", "provider" => provider)
        .record(elapsed.as_secs_f64());
}
