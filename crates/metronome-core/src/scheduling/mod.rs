//! Scheduling-mode detection.
//!
//! Decides whether the periodic exporter can rely on a dedicated background
//! thread or has to run as a task on the async runtime, with a scoped override
//! so tests can force either branch.
mod detector;
pub use detector::{is_threading_disabled, is_threading_disabled_with};

mod mode;
pub use mode::SchedulingMode;

mod overrides;
pub use overrides::{
    ThreadingOverrideGuard, begin_threading_override, current_threading_override,
    isolate_threading_override, propagate_threading_override, scope_threading_override,
    with_threading_override,
};

mod probe;
pub use probe::{CapacityProbe, PoolCapacity, ProbeError, ProbeResult, RuntimeProbe};
