//! Test helpers shared across modules.
use std::{
    env,
    sync::{Mutex, MutexGuard},
};

use metronome_model::{OTEL_METRIC_EXPORT_INTERVAL, OTEL_METRIC_EXPORT_TIMEOUT};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process environment.
///
/// The export keys are cleared on acquire and again on drop.
pub(crate) struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn acquire() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        Self { _lock: lock }
    }

    pub(crate) fn set(&self, key: &str, value: &str) {
        // SAFETY: environment mutation in this crate's tests only happens under ENV_LOCK.
        unsafe { env::set_var(key, value) };
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_env();
    }
}

fn clear_env() {
    // SAFETY: only called while ENV_LOCK is held.
    unsafe {
        env::remove_var(OTEL_METRIC_EXPORT_INTERVAL);
        env::remove_var(OTEL_METRIC_EXPORT_TIMEOUT);
    }
}
