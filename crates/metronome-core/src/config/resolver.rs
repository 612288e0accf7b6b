//! Precedence-ordered resolution of periodic-export settings.
//!
//! Each numeric setting walks the same chain of layers, highest precedence first:
//! 1. explicit value from [`ReaderOptions`];
//! 2. the configuration source (process environment or a key-value store);
//! 3. the built-in default.
//!
//! The first layer that yields a value wins. A source value that cannot be parsed
//! stops resolution with [`ConfigError::InvalidFormat`] instead of falling through
//! to the default.
use std::fmt;

use metronome_model::{
    ConfigSource, DEFAULT_EXPORT_INTERVAL_MS, DEFAULT_EXPORT_TIMEOUT_MS, Millis,
    OTEL_METRIC_EXPORT_INTERVAL, OTEL_METRIC_EXPORT_TIMEOUT, PeriodicExportConfig,
    PeriodicExportOptions, ProcessEnv, ReaderOptions, TemporalityPreference,
};
use tracing::debug;

use crate::config::{error::ConfigResult, parse::lookup_millis};

/// Layer that supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Explicit caller option.
    Options,
    /// Configuration source, tagged with [`ConfigSource::name`].
    Source(&'static str),
    /// Built-in default.
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Options => f.write_str("options"),
            Origin::Source(name) => f.write_str(name),
            Origin::Default => f.write_str("default"),
        }
    }
}

type Found<T> = Option<(T, Origin)>;
type Layer<'a, T> = &'a dyn Fn() -> ConfigResult<Found<T>>;

/// Resolves `options` against the live process environment.
pub fn resolve_from_env(options: &ReaderOptions) -> ConfigResult<PeriodicExportConfig> {
    resolve(options, &ProcessEnv)
}

/// Resolves `options` against an arbitrary configuration source.
///
/// The source fully replaces the environment layer: there is no process
/// environment fallback beneath it.
pub fn resolve<S>(options: &ReaderOptions, source: &S) -> ConfigResult<PeriodicExportConfig>
where
    S: ConfigSource + ?Sized,
{
    let interval = resolve_millis(
        options.periodic.export_interval_ms,
        source,
        OTEL_METRIC_EXPORT_INTERVAL,
        DEFAULT_EXPORT_INTERVAL_MS,
    )?;
    let timeout = resolve_millis(
        options.periodic.export_timeout_ms,
        source,
        OTEL_METRIC_EXPORT_TIMEOUT,
        DEFAULT_EXPORT_TIMEOUT_MS,
    )?;

    let (temporality, origin) = match options.temporality {
        Some(t) => (t, Origin::Options),
        None => (TemporalityPreference::default(), Origin::Default),
    };
    debug!(temporality = %temporality, origin = %origin, "resolved temporality preference");

    Ok(PeriodicExportConfig::new(interval, timeout, temporality))
}

/// Builds periodic options purely from a configuration source.
///
/// Keys the source does not define stay `None`, so the result can be fed to
/// [`resolve`] and pick up defaults there.
pub fn load_periodic_options<S>(source: &S) -> ConfigResult<PeriodicExportOptions>
where
    S: ConfigSource + ?Sized,
{
    Ok(PeriodicExportOptions {
        export_interval_ms: lookup_millis(source, OTEL_METRIC_EXPORT_INTERVAL)?,
        export_timeout_ms: lookup_millis(source, OTEL_METRIC_EXPORT_TIMEOUT)?,
    })
}

fn resolve_millis<S>(
    explicit: Option<Millis>,
    source: &S,
    key: &'static str,
    default: Millis,
) -> ConfigResult<Millis>
where
    S: ConfigSource + ?Sized,
{
    let from_options = || -> ConfigResult<Found<Millis>> {
        Ok(explicit.map(|v| (v, Origin::Options)))
    };
    let from_source = || -> ConfigResult<Found<Millis>> {
        Ok(lookup_millis(source, key)?.map(|v| (v, Origin::Source(source.name()))))
    };
    let layers: [Layer<'_, Millis>; 2] = [&from_options, &from_source];

    let (value, origin) = first_found(&layers)?.unwrap_or((default, Origin::Default));
    debug!(key, value, origin = %origin, "resolved export setting");
    Ok(value)
}

fn first_found<T>(layers: &[Layer<'_, T>]) -> ConfigResult<Found<T>> {
    for layer in layers {
        if let Some(found) = layer()? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
