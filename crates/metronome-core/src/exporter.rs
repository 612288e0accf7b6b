//! Exporter seam.
//!
//! Exporters are external collaborators: the reader only needs to trigger one
//! export cycle and learn whether it succeeded.
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// This cycle failed; the next one may succeed.
    #[error("export failed: {0}")]
    Failed(String),

    /// The exporter will not accept further work.
    #[error("exporter is shut down")]
    Shutdown,
}

pub type ExportResult = Result<(), ExportError>;

/// Pushes collected metrics to a backend.
#[async_trait]
pub trait MetricExporter: Send + Sync + 'static {
    /// Identifier used in task names and logs.
    fn name(&self) -> &str;

    /// Runs one export cycle.
    async fn export(&self) -> ExportResult;
}

/// Shared handle to an exporter.
pub type ExporterHandle = Arc<dyn MetricExporter>;

/// Exporter that accepts everything and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpExporter;

#[async_trait]
impl MetricExporter for NoOpExporter {
    fn name(&self) -> &str {
        "noop"
    }

    #[inline]
    async fn export(&self) -> ExportResult {
        Ok(())
    }
}

/// Handle to a [`NoOpExporter`].
#[inline]
pub fn noop_exporter() -> ExporterHandle {
    Arc::new(NoOpExporter)
}
