use std::io::IsTerminal;

use metronome_model::ConfigSource;
use serde::{Deserialize, Serialize};

use crate::logger::{
    error::LoggerResult,
    object::{LoggerFormat, LoggerLevel},
};

/// Key holding the filter expression, e.g. `"metronome_core=debug,info"`.
pub const METRONOME_LOG: &str = "METRONOME_LOG";

/// Key holding the output format (`text` or `json`).
pub const METRONOME_LOG_FORMAT: &str = "METRONOME_LOG_FORMAT";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression.
    pub level: LoggerLevel,
    /// Include module/target names.
    pub with_targets: bool,
    /// Colored output; only honored on a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with [`METRONOME_LOG`] and [`METRONOME_LOG_FORMAT`].
    ///
    /// Blank values are ignored; malformed ones are errors.
    pub fn from_source<S>(source: &S) -> LoggerResult<Self>
    where
        S: ConfigSource + ?Sized,
    {
        let mut cfg = Self::default();
        if let Some(level) = non_blank(source, METRONOME_LOG) {
            cfg.level = level.parse()?;
        }
        if let Some(format) = non_blank(source, METRONOME_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        Ok(cfg)
    }

    /// Color is used only when enabled and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

fn non_blank<S>(source: &S, key: &str) -> Option<String>
where
    S: ConfigSource + ?Sized,
{
    source.get(key).filter(|v| !v.trim().is_empty())
}
