use bannergen::BannerError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// A custom error type for the server application.
///
/// This enum encapsulates the different kinds of errors that can occur within
/// the server, allowing them to be converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request body was unusable before any banner work started.
    BadRequest(String),
    /// Errors originating from the `bannergen` pipeline.
    Banner(BannerError),
    /// The route exists but not for this method.
    MethodNotAllowed,
}

impl From<BannerError> for AppError {
    fn from(err: BannerError) -> Self {
        AppError::Banner(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Banner(BannerError::InvalidInput(message)) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Banner(err) => {
                // Log the original error for debugging purposes
                error!("BannerError: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": INTERNAL_ERROR_MESSAGE, "message": err.detail() }),
                )
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": METHOD_NOT_ALLOWED_MESSAGE }),
            ),
        };

        (status_code, Json(body)).into_response()
    }
}
