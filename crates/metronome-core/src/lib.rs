//! Control plane for periodic metric export.
//!
//! - [`scheduling`] decides between a dedicated thread and a runtime task.
//! - [`config`] resolves interval, timeout and temporality with fixed precedence.
//! - [`reader`] composes both at reader construction time.
//! - [`map`] describes the task-based timer for taskvisor.
pub mod config;
pub mod error;
pub mod exporter;
pub mod map;
pub mod reader;
pub mod scheduling;

#[cfg(test)]
mod testing;

pub use error::{CoreError, CoreResult};

pub mod prelude {
    pub use crate::config::{ConfigError, resolve, resolve_from_env};
    pub use crate::error::CoreError;
    pub use crate::exporter::{ExportError, ExporterHandle, MetricExporter};
    pub use crate::reader::PeriodicReader;
    pub use crate::scheduling::{
        SchedulingMode, begin_threading_override, is_threading_disabled,
        scope_threading_override,
    };
}
