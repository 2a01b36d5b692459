//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! Query logic records events through the sink boundary only; structured
//! log lines go through `tracing` at the call sites.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
