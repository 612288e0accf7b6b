//! Translation of a resolved configuration into the task-based timer.
//!
//! Used when the scheduling mode is [`crate::scheduling::SchedulingMode::Task`].
//! Submitting and running the task belongs to the caller's supervisor.
mod spec;
mod task;

pub use spec::{
    export_cadence, to_backoff_policy, to_controller_spec, to_restart_policy, to_task_spec,
};
pub use task::{EXPORT_TASK_PREFIX, to_export_task};
