use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlucoseError {
    #[error("invalid glucose value: {0} (must be a positive number)")]
    InvalidValue(f64),

    #[error("stored readings could not be parsed: {0}")]
    StorageCorrupt(String),

    #[error("missing API key: set {0} to enable insights")]
    MissingCredential(&'static str),

    #[error("insight service failed: {0}")]
    Collaborator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GlucoseError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<GlucoseError> for AppError {
    fn from(err: GlucoseError) -> Self {
        let status = match &err {
            GlucoseError::InvalidValue(_) => StatusCode::BAD_REQUEST,
            GlucoseError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
            GlucoseError::Collaborator(_) | GlucoseError::Http(_) => StatusCode::BAD_GATEWAY,
            GlucoseError::StorageCorrupt(_) | GlucoseError::Io(_) | GlucoseError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
