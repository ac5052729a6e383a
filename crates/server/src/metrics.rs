//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Reformat server:
//! - Conversion attempt counters (started, completed, failed)
//! - Intake rejection counts by reason

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Conversions dispatched since startup.
pub static CONVERSIONS_STARTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "reformat_conversions_started_total",
        "Total conversion attempts started",
    )
    .unwrap()
});

/// Conversions that completed successfully.
pub static CONVERSIONS_COMPLETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "reformat_conversions_completed_total",
        "Total conversions completed successfully",
    )
    .unwrap()
});

/// Conversions that failed (terminal).
pub static CONVERSIONS_FAILED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "reformat_conversions_failed_total",
        "Total conversions that failed",
    )
    .unwrap()
});

/// Files rejected at intake, by reason.
pub static INTAKE_REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reformat_intake_rejections_total",
            "Files rejected during intake validation",
        ),
        &["reason"],
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(CONVERSIONS_STARTED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(CONVERSIONS_COMPLETED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(CONVERSIONS_FAILED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(INTAKE_REJECTIONS_TOTAL.clone()))
        .unwrap();
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
