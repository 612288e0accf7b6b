use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown temporality preference: {0} (expected: cumulative|delta|lowmemory)")]
    UnknownTemporality(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
