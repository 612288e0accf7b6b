mod kv;
pub use kv::KeyValue;

mod map;
pub use map::ConfigMap;

mod constants;
pub use constants::{
    DEFAULT_EXPORT_INTERVAL_MS, DEFAULT_EXPORT_TIMEOUT_MS, OTEL_METRIC_EXPORT_INTERVAL,
    OTEL_METRIC_EXPORT_TIMEOUT,
};

/// Duration value in milliseconds as carried by reader options.
///
/// Signed on purpose: explicitly supplied values are passed through unvalidated,
/// and a non-positive timeout means "no deadline" to the scheduler.
pub type Millis = i32;
