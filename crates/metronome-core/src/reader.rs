//! Construction-time plan of a periodic metric reader.
//!
//! Building a [`PeriodicReader`] resolves the export configuration first and
//! then picks the scheduling mode; both results are frozen for the reader's
//! lifetime. Running the export loop is up to whoever consumes the plan.
use std::fmt;

use metronome_model::{
    ConfigSource, Millis, PeriodicExportConfig, ProcessEnv, ReaderOptions, TemporalityPreference,
};
use taskvisor::ControllerSpec;
use tracing::info;

use crate::{
    config,
    error::CoreResult,
    exporter::ExporterHandle,
    map::{to_controller_spec, to_export_task},
    scheduling::{CapacityProbe, RuntimeProbe, SchedulingMode},
};

/// Exporter together with its resolved timing and scheduling mode.
#[derive(Clone)]
pub struct PeriodicReader {
    exporter: ExporterHandle,
    config: PeriodicExportConfig,
    mode: SchedulingMode,
}

impl PeriodicReader {
    /// Resolves against the process environment and probes the live runtime.
    ///
    /// # Errors
    /// Fails with [`crate::CoreError::Config`] when `OTEL_METRIC_EXPORT_INTERVAL`
    /// or `OTEL_METRIC_EXPORT_TIMEOUT` is set to something that is not an integer.
    pub fn new(exporter: ExporterHandle, options: &ReaderOptions) -> CoreResult<Self> {
        Self::with_source(exporter, options, &ProcessEnv)
    }

    /// Like [`PeriodicReader::new`], resolving against `source` instead of the
    /// process environment.
    pub fn with_source<S>(
        exporter: ExporterHandle,
        options: &ReaderOptions,
        source: &S,
    ) -> CoreResult<Self>
    where
        S: ConfigSource + ?Sized,
    {
        Self::with_parts(exporter, options, source, &RuntimeProbe)
    }

    /// Fully injectable constructor.
    pub fn with_parts<S, P>(
        exporter: ExporterHandle,
        options: &ReaderOptions,
        source: &S,
        probe: &P,
    ) -> CoreResult<Self>
    where
        S: ConfigSource + ?Sized,
        P: CapacityProbe + ?Sized,
    {
        let config = config::resolve(options, source)?;
        let mode = SchedulingMode::detect_with(probe);

        info!(
            exporter = exporter.name(),
            source = source.name(),
            interval_ms = config.export_interval_ms(),
            timeout_ms = config.export_timeout_ms(),
            temporality = %config.temporality(),
            mode = %mode,
            "periodic reader configured"
        );
        Ok(Self {
            exporter,
            config,
            mode,
        })
    }

    pub fn exporter(&self) -> &ExporterHandle {
        &self.exporter
    }

    pub fn config(&self) -> &PeriodicExportConfig {
        &self.config
    }

    pub fn mode(&self) -> SchedulingMode {
        self.mode
    }

    pub fn export_interval_ms(&self) -> Millis {
        self.config.export_interval_ms()
    }

    pub fn export_timeout_ms(&self) -> Millis {
        self.config.export_timeout_ms()
    }

    pub fn temporality(&self) -> TemporalityPreference {
        self.config.temporality()
    }

    /// Task-based timer spec for this reader's exporter.
    pub fn controller_spec(&self) -> ControllerSpec {
        to_controller_spec(to_export_task(self.exporter.clone()), &self.config)
    }
}

impl fmt::Debug for PeriodicReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodicReader")
            .field("exporter", &self.exporter.name())
            .field("config", &self.config)
            .field("mode", &self.mode)
            .finish()
    }
}

impl fmt::Display for PeriodicReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PeriodicReader(exporter={}, interval_ms={}, timeout_ms={}, mode={})",
            self.exporter.name(),
            self.config.export_interval_ms(),
            self.config.export_timeout_ms(),
            self.mode
        )
    }
}
