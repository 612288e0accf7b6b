mod domain;
pub use domain::{ConfigMap, KeyValue, Millis};
pub use domain::{
    DEFAULT_EXPORT_INTERVAL_MS, DEFAULT_EXPORT_TIMEOUT_MS, OTEL_METRIC_EXPORT_INTERVAL,
    OTEL_METRIC_EXPORT_TIMEOUT,
};

mod error;
pub use error::{ModelError, ModelResult};

mod source;
pub use source::{ConfigSource, ProcessEnv};

mod temporality;
pub use temporality::TemporalityPreference;

mod options;
pub use options::{PeriodicExportOptions, ReaderOptions};

mod config;
pub use config::PeriodicExportConfig;
