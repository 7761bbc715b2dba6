//! Telemetry utilities for line timing and span correlation.

use std::time::Instant;

/// Guard for timing one line through the pipeline and recording metrics.
///
/// Records latency when dropped, labelled with the outcome set by
/// [`CommandTimer::set_outcome`] (`"rejected"` until set).
pub struct CommandTimer {
    outcome: &'static str,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a line.
    pub fn new() -> Self {
        Self {
            outcome: "rejected",
            start: Instant::now(),
        }
    }

    /// Label the line's outcome, e.g. `"system"` or `"transmit"`.
    pub fn set_outcome(&mut self, outcome: &'static str) {
        self.outcome = outcome;
    }
}

impl Default for CommandTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        crate::metrics::record_line(self.outcome, duration);
    }
}

/// Standardized span constructors for console observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for a console session.
    pub fn session(config: &str) -> Span {
        info_span!("session", config = %config)
    }

    /// Create a span for one input line.
    pub fn line(number: u64, callsign: Option<&str>) -> Span {
        if let Some(callsign) = callsign {
            info_span!("line", number, callsign = %callsign)
        } else {
            info_span!("line", number)
        }
    }
}
