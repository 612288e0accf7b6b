use std::time::Duration;

use metronome_model::{DEFAULT_EXPORT_INTERVAL_MS, PeriodicExportConfig};
use taskvisor::{BackoffPolicy, ControllerSpec, JitterPolicy, RestartPolicy, TaskRef, TaskSpec};
use tracing::warn;

/// Cadence used by the task timer.
///
/// A non-positive interval cannot drive a timer, so it falls back to the
/// built-in default here rather than at resolution time.
pub fn export_cadence(config: &PeriodicExportConfig) -> Duration {
    config.export_interval().unwrap_or_else(|| {
        warn!(
            interval_ms = config.export_interval_ms(),
            default_ms = DEFAULT_EXPORT_INTERVAL_MS,
            "non-positive export interval; using default cadence"
        );
        Duration::from_millis(DEFAULT_EXPORT_INTERVAL_MS as u64)
    })
}

/// Re-run after every cycle, one interval after a success.
pub fn to_restart_policy(config: &PeriodicExportConfig) -> RestartPolicy {
    RestartPolicy::Always {
        interval: Some(export_cadence(config)),
    }
}

/// Failed cycles are retried one interval apart.
pub fn to_backoff_policy(config: &PeriodicExportConfig) -> BackoffPolicy {
    let cadence = export_cadence(config);
    BackoffPolicy {
        first: cadence,
        max: cadence,
        jitter: JitterPolicy::None,
        factor: 1.0,
    }
}

/// Task-based timer for the export loop.
///
/// The per-run timeout is the export deadline; `None` (zero or negative
/// timeout) runs each export without a deadline.
pub fn to_task_spec(task: TaskRef, config: &PeriodicExportConfig) -> TaskSpec {
    TaskSpec::new(
        task,
        to_restart_policy(config),
        to_backoff_policy(config),
        config.export_timeout(),
    )
}

/// Controller submission that replaces any previous export task in its slot.
pub fn to_controller_spec(task: TaskRef, config: &PeriodicExportConfig) -> ControllerSpec {
    ControllerSpec::replace(to_task_spec(task, config))
}

#[cfg(test)]
mod tests {
    use metronome_model::TemporalityPreference;
    use taskvisor::{TaskError, TaskFn};
    use tokio_util::sync::CancellationToken;

    use super::*;

    fn idle() -> TaskRef {
        TaskFn::arc("idle", |_cancel: CancellationToken| async move {
            Ok::<(), TaskError>(())
        })
    }

    fn cfg(interval_ms: i32, timeout_ms: i32) -> PeriodicExportConfig {
        PeriodicExportConfig::new(interval_ms, timeout_ms, TemporalityPreference::Cumulative)
    }

    #[test]
    fn cadence_follows_interval() {
        assert_eq!(export_cadence(&cfg(1_500, 0)), Duration::from_millis(1_500));
    }

    #[test]
    fn non_positive_interval_uses_default_cadence() {
        for ms in [0, -10] {
            assert_eq!(export_cadence(&cfg(ms, 0)), Duration::from_secs(60));
        }
    }

    #[test]
    fn backoff_is_flat_at_interval() {
        let policy = to_backoff_policy(&cfg(250, 100));
        assert_eq!(policy.first, Duration::from_millis(250));
        assert_eq!(policy.max, Duration::from_millis(250));
        assert_eq!(policy.factor, 1.0);
    }

    #[test]
    fn zero_timeout_has_no_deadline() {
        let spec = to_task_spec(idle(), &cfg(1_000, 0));
        assert_eq!(spec.timeout(), None);
    }

    #[test]
    fn positive_timeout_is_the_deadline() {
        let spec = to_task_spec(idle(), &cfg(1_000, 250));
        assert_eq!(spec.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn task_always_restarts_one_interval_apart() {
        let spec = to_task_spec(idle(), &cfg(1_000, 250));
        assert!(matches!(
            spec.restart(),
            RestartPolicy::Always { interval: Some(d) } if d == Duration::from_millis(1_000)
        ));
        assert_eq!(spec.backoff().first, Duration::from_millis(1_000));
        assert_eq!(spec.name(), "idle");
    }

    #[test]
    fn non_positive_interval_restarts_at_default_cadence() {
        let spec = to_task_spec(idle(), &cfg(0, 0));
        assert!(matches!(
            spec.restart(),
            RestartPolicy::Always { interval: Some(d) } if d == Duration::from_secs(60)
        ));
    }
}
