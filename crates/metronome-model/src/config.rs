use std::{fmt, time::Duration};

use serde::Serialize;

use crate::{DEFAULT_EXPORT_INTERVAL_MS, DEFAULT_EXPORT_TIMEOUT_MS, Millis, TemporalityPreference};

/// Fully resolved settings of a periodic reader.
///
/// Produced once at reader construction and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicExportConfig {
    export_interval_ms: Millis,
    export_timeout_ms: Millis,
    temporality: TemporalityPreference,
}

impl PeriodicExportConfig {
    pub fn new(
        export_interval_ms: Millis,
        export_timeout_ms: Millis,
        temporality: TemporalityPreference,
    ) -> Self {
        Self {
            export_interval_ms,
            export_timeout_ms,
            temporality,
        }
    }

    #[inline]
    pub fn export_interval_ms(&self) -> Millis {
        self.export_interval_ms
    }

    #[inline]
    pub fn export_timeout_ms(&self) -> Millis {
        self.export_timeout_ms
    }

    #[inline]
    pub fn temporality(&self) -> TemporalityPreference {
        self.temporality
    }

    /// Export cadence, or `None` when the configured interval is not positive.
    pub fn export_interval(&self) -> Option<Duration> {
        positive_millis(self.export_interval_ms)
    }

    /// Per-export deadline. `None` means "no timeout" (zero or negative value).
    pub fn export_timeout(&self) -> Option<Duration> {
        positive_millis(self.export_timeout_ms)
    }
}

impl Default for PeriodicExportConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXPORT_INTERVAL_MS,
            DEFAULT_EXPORT_TIMEOUT_MS,
            TemporalityPreference::default(),
        )
    }
}

impl fmt::Display for PeriodicExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PeriodicExportConfig(interval_ms={}, timeout_ms={}, temporality={})",
            self.export_interval_ms, self.export_timeout_ms, self.temporality
        )
    }
}

fn positive_millis(ms: Millis) -> Option<Duration> {
    u64::try_from(ms)
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
