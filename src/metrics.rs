//! Prometheus metrics for the console.
//!
//! - `atc_lines_total{kind}` - Lines processed (`system`, `transmit`, `rejected`, `unrecognised`)
//! - `atc_rejected_total{error}` - Rejected lines by error code
//! - `atc_command_total{command}` - Accepted commands by canonical name
//! - `atc_line_duration_seconds{kind}` - Pipeline latency per line

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::{Once, OnceLock};

/// Registry for all console metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Lines processed by outcome.
pub static LINE_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Rejected lines by error code.
pub static REJECTED_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Accepted commands by canonical name.
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Pipeline latency by line outcome.
pub static LINE_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Initialize the metrics registry.
///
/// Safe to call more than once; only the first call registers anything.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(register_all);
}

fn register_all() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            match $init {
                Ok(m) => {
                    if let Err(e) = r.register(Box::new(m.clone())) {
                        tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
                    }
                    let _ = $metric.set(m);
                }
                Err(e) => {
                    tracing::warn!(error = %e, concat!("Failed to create metric ", stringify!($metric)));
                }
            }
        };
    }

    register!(LINE_COUNTER, IntCounterVec::new(Opts::new("atc_lines_total", "Lines processed by outcome"), &["kind"]));
    register!(REJECTED_COUNTER, IntCounterVec::new(Opts::new("atc_rejected_total", "Rejected lines by error code"), &["error"]));
    register!(COMMAND_COUNTER, IntCounterVec::new(Opts::new("atc_command_total", "Accepted commands by name"), &["command"]));
    register!(LINE_LATENCY, HistogramVec::new(
        HistogramOpts::new("atc_line_duration_seconds", "Parse latency per line")
            .buckets(vec![0.000_005, 0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005]),
        &["kind"]));
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

/// Record one processed line with its latency.
#[inline]
pub fn record_line(kind: &str, duration_secs: f64) {
    if let Some(c) = LINE_COUNTER.get() {
        c.with_label_values(&[kind]).inc();
    }
    if let Some(h) = LINE_LATENCY.get() {
        h.with_label_values(&[kind]).observe(duration_secs);
    }
}

/// Record a rejected line.
#[inline]
pub fn record_rejection(error: &str) {
    if let Some(c) = REJECTED_COUNTER.get() {
        c.with_label_values(&[error]).inc();
    }
}

/// Record accepted commands.
#[inline]
pub fn record_commands<'a>(names: impl IntoIterator<Item = &'a str>) {
    if let Some(c) = COMMAND_COUNTER.get() {
        for name in names {
            c.with_label_values(&[name]).inc();
        }
    }
}
