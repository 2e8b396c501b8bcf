use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Durable state exists but does not parse; never silently replaced
    // with an empty journal.
    #[error("journal data is corrupt: {0}")]
    CorruptStore(String),

    #[error("{0}")]
    Validation(String),

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("storage failure: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn storage(err: impl std::error::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::IncorrectPassword => StatusCode::UNAUTHORIZED,
            AppError::CorruptStore(message) | AppError::Storage(message) => {
                error!("{message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
