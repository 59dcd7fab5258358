use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

pub type ServerResult<T> = Result<T, ServerError>;
