use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
