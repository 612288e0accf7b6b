use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected base-10 integer milliseconds)")]
    InvalidFormat { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
