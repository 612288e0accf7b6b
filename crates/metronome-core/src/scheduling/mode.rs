use std::fmt;

use serde::Serialize;

use crate::scheduling::{
    detector::{is_threading_disabled, is_threading_disabled_with},
    probe::CapacityProbe,
};

/// Execution strategy for the repeating export task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingMode {
    /// A dedicated background thread drives the timer.
    DedicatedThread,
    /// A task on the async runtime drives the timer.
    Task,
}

impl SchedulingMode {
    /// Mode for the current context, see [`is_threading_disabled`].
    pub fn detect() -> Self {
        Self::from_threading_disabled(is_threading_disabled())
    }

    pub fn detect_with<P>(probe: &P) -> Self
    where
        P: CapacityProbe + ?Sized,
    {
        Self::from_threading_disabled(is_threading_disabled_with(probe))
    }

    #[inline]
    pub fn from_threading_disabled(disabled: bool) -> Self {
        if disabled {
            SchedulingMode::Task
        } else {
            SchedulingMode::DedicatedThread
        }
    }

    #[inline]
    pub fn is_task(&self) -> bool {
        matches!(self, SchedulingMode::Task)
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulingMode::DedicatedThread => "dedicated-thread",
            SchedulingMode::Task => "task",
        }
    }
}

impl fmt::Display for SchedulingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{PoolCapacity, with_threading_override};

    #[test]
    fn maps_decision_to_mode() {
        assert_eq!(
            SchedulingMode::from_threading_disabled(true),
            SchedulingMode::Task
        );
        assert_eq!(
            SchedulingMode::from_threading_disabled(false),
            SchedulingMode::DedicatedThread
        );
    }

    #[test]
    fn detect_with_probe() {
        assert!(SchedulingMode::detect_with(&PoolCapacity::new(1, 1)).is_task());
        assert!(!SchedulingMode::detect_with(&PoolCapacity::new(2, 2)).is_task());
    }

    #[test]
    fn detect_honors_override() {
        let mode = with_threading_override(true, SchedulingMode::detect);
        assert_eq!(mode, SchedulingMode::Task);

        let mode = with_threading_override(false, SchedulingMode::detect);
        assert_eq!(mode, SchedulingMode::DedicatedThread);
    }

    #[test]
    fn display_and_serde_agree() {
        for mode in [SchedulingMode::DedicatedThread, SchedulingMode::Task] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
    }
}
