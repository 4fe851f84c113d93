/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use wish_core::WishError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Body of every failed record creation
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create user";

/// Body of every failed record listing
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Core(#[from] WishError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Creating a record failed; the cause has already been logged
    #[error("Failed to create user")]
    CreateFailed,

    /// Listing records failed; the cause has already been logged
    #[error("Failed to fetch users")]
    FetchFailed,
}

impl From<multer::Error> for ServerError {
    fn from(err: multer::Error) -> Self {
        ServerError::BadRequest(format!("Failed to parse multipart: {}", err))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::CreateFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                CREATE_FAILED_MESSAGE.to_string(),
            ),
            ServerError::FetchFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                FETCH_FAILED_MESSAGE.to_string(),
            ),
            ServerError::Core(ref e) => {
                tracing::error!("Core error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
