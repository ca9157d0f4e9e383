use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error("malformed feed message: {0}")]
    Feed(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
