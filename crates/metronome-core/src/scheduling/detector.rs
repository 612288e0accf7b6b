use tracing::{debug, trace};

use crate::scheduling::{
    overrides::current_threading_override,
    probe::{CapacityProbe, RuntimeProbe},
};

/// Whether dedicated background threads must be avoided in the current context.
///
/// An active override is returned verbatim. Otherwise the live environment is
/// probed and threading counts as disabled only when both the worker and the
/// I/O maxima are exactly one. A failed probe reports threading as available.
pub fn is_threading_disabled() -> bool {
    is_threading_disabled_with(&RuntimeProbe)
}

/// [`is_threading_disabled`] with a caller-supplied probe.
pub fn is_threading_disabled_with<P>(probe: &P) -> bool
where
    P: CapacityProbe + ?Sized,
{
    if let Some(forced) = current_threading_override() {
        trace!(disabled = forced, "threading decision forced by override");
        return forced;
    }

    match probe.capacity() {
        Ok(cap) => {
            let disabled = cap.is_single_unit();
            trace!(
                max_workers = cap.max_workers,
                max_io = cap.max_io,
                disabled,
                "probed execution pool capacity"
            );
            disabled
        }
        Err(e) => {
            debug!(error = %e, "capacity probe failed; assuming threads are available");
            false
        }
    }
}
