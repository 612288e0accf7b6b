mod config;
mod error;
mod logger;
mod object;

pub use config::{LoggerConfig, METRONOME_LOG, METRONOME_LOG_FORMAT};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// # Examples
/// ```rust
/// use metronome_model::ProcessEnv;
/// use metronome_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::from_source(&ProcessEnv).expect("valid logger env");
/// init_logger(&config).expect("logger not yet initialized");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => logger::logger_text(cfg),
        LoggerFormat::Json => logger::logger_json(cfg),
    }
}
