use serde::{Deserialize, Serialize};

use crate::{Millis, TemporalityPreference};

/// Caller-supplied timing options for a periodic reader.
///
/// Every field is optional; `None` defers to the configuration source and then to
/// the built-in default. Values that are present are used verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeriodicExportOptions {
    /// Delay between the start of two consecutive exports.
    pub export_interval_ms: Option<Millis>,
    /// Deadline for a single export; zero disables it.
    pub export_timeout_ms: Option<Millis>,
}

/// Caller-supplied options for a metric reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReaderOptions {
    /// Requested aggregation temporality.
    pub temporality: Option<TemporalityPreference>,
    /// Timing of the periodic export loop.
    pub periodic: PeriodicExportOptions,
}

impl ReaderOptions {
    pub fn with_temporality(mut self, temporality: TemporalityPreference) -> Self {
        self.temporality = Some(temporality);
        self
    }

    pub fn with_export_interval_ms(mut self, ms: Millis) -> Self {
        self.periodic.export_interval_ms = Some(ms);
        self
    }

    pub fn with_export_timeout_ms(mut self, ms: Millis) -> Self {
        self.periodic.export_timeout_ms = Some(ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_set() {
        let opts = ReaderOptions::default();
        assert_eq!(opts.temporality, None);
        assert_eq!(opts.periodic.export_interval_ms, None);
        assert_eq!(opts.periodic.export_timeout_ms, None);
    }

    #[test]
    fn builders_set_fields() {
        let opts = ReaderOptions::default()
            .with_temporality(TemporalityPreference::Delta)
            .with_export_interval_ms(123)
            .with_export_timeout_ms(0);

        assert_eq!(opts.temporality, Some(TemporalityPreference::Delta));
        assert_eq!(opts.periodic.export_interval_ms, Some(123));
        assert_eq!(opts.periodic.export_timeout_ms, Some(0));
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"temporality": "delta", "periodic": {"exportIntervalMs": -5}}"#;
        let opts: ReaderOptions = serde_json::from_str(json).unwrap();

        assert_eq!(opts.temporality, Some(TemporalityPreference::Delta));
        assert_eq!(opts.periodic.export_interval_ms, Some(-5));
        assert_eq!(opts.periodic.export_timeout_ms, None);
    }

    #[test]
    fn empty_object_is_default() {
        let opts: ReaderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ReaderOptions::default());
    }
}
