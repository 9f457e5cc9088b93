use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Mail delivery failed: {0}")]
    MailDelivery(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Provider detail stays in the server-side log; clients only
            // ever see the generic message.
            AppError::MailDelivery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email.".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::MailDelivery(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
