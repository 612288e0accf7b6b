use taskvisor::{TaskError, TaskFn, TaskRef};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::exporter::{ExportError, ExporterHandle, MetricExporter};

/// Prefix of task names produced by [`to_export_task`].
pub const EXPORT_TASK_PREFIX: &str = "metronome-export";

/// Wraps one export cycle of `exporter` into a task body.
pub fn to_export_task(exporter: ExporterHandle) -> TaskRef {
    let name = format!("{EXPORT_TASK_PREFIX}-{}", exporter.name());
    TaskFn::arc(name, move |cancel: CancellationToken| {
        let exporter = exporter.clone();
        async move { run_export(exporter.as_ref(), cancel).await }
    })
}

/// Runs a single export, giving up early when `cancel` fires.
///
/// A shut-down exporter is reported as fatal so the task is not restarted.
pub(crate) async fn run_export(
    exporter: &dyn MetricExporter,
    cancel: CancellationToken,
) -> Result<(), TaskError> {
    if cancel.is_cancelled() {
        return Err(TaskError::Canceled);
    }
    trace!(exporter = exporter.name(), "export cycle started");

    tokio::select! {
        res = exporter.export() => match res {
            Ok(()) => {
                debug!(exporter = exporter.name(), "export cycle succeeded");
                Ok(())
            }
            Err(ExportError::Shutdown) => Err(TaskError::Fatal {
                reason: format!("exporter {} is shut down", exporter.name()),
            }),
            Err(e) => Err(TaskError::Fail {
                reason: e.to_string(),
            }),
        },
        _ = cancel.cancelled() => {
            debug!(exporter = exporter.name(), "export cycle canceled");
            Err(TaskError::Canceled)
        }
    }
}
