use std::sync::PoisonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("HTTP server error: {0}")]
    Server(#[from] warp::Error),
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Internal(format!("contact store lock poisoned: {}", err))
    }
}
