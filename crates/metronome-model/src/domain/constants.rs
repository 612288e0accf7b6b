//! Well-known configuration keys and built-in defaults for periodic export.
//!
//! The key names are shared with every OpenTelemetry SDK and must not change.

use super::Millis;

/// Environment key holding the export interval in milliseconds.
pub const OTEL_METRIC_EXPORT_INTERVAL: &str = "OTEL_METRIC_EXPORT_INTERVAL";

/// Environment key holding the per-export timeout in milliseconds.
pub const OTEL_METRIC_EXPORT_TIMEOUT: &str = "OTEL_METRIC_EXPORT_TIMEOUT";

/// Interval used when neither options nor the configuration source provide one.
pub const DEFAULT_EXPORT_INTERVAL_MS: Millis = 60_000;

/// Timeout used when neither options nor the configuration source provide one.
pub const DEFAULT_EXPORT_TIMEOUT_MS: Millis = 30_000;
