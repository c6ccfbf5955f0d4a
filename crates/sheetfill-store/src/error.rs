use thiserror::Error;

/// Errors raised by store backends (I/O, parsing, persistence).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{backend}: {message}")]
    Backend { backend: String, message: String },

    #[error("no backing path known for in-place save")]
    NoBackingPath,
}

impl StoreError {
    pub fn from_backend(backend: &str, err: impl std::fmt::Display) -> Self {
        StoreError::Backend {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::from_backend("csv", err)
    }
}
