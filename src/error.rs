use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::service::hasher::HashingError;

#[derive(Debug, ThisError)]
pub enum PassgateError {
    #[error("Request body is not valid credentials JSON: {0}")]
    Decode(String),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] HashingError),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("User not found")]
    UserNotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Username already registered")]
    UsernameTaken,

    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PassgateError {
    pub fn status(&self) -> StatusCode {
        match self {
            PassgateError::Decode(_) => StatusCode::BAD_REQUEST,
            // Unknown users are reported exactly like wrong passwords.
            PassgateError::UserNotFound | PassgateError::Unauthorized => StatusCode::UNAUTHORIZED,
            PassgateError::UsernameTaken => StatusCode::CONFLICT,
            PassgateError::Hashing(_)
            | PassgateError::Database(_)
            | PassgateError::Task(_)
            | PassgateError::Config(_)
            | PassgateError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PassgateError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_body = match self {
            PassgateError::Decode(_) => ApiErrorBody {
                code: "BAD_REQUEST".to_string(),
                message: "Request body must be a JSON object with string `username` and `password`."
                    .to_string(),
            },
            PassgateError::UserNotFound | PassgateError::Unauthorized => ApiErrorBody {
                code: "UNAUTHORIZED".to_string(),
                message: "Invalid username or password.".to_string(),
            },
            PassgateError::UsernameTaken => ApiErrorBody {
                code: "CONFLICT".to_string(),
                message: "Username is already registered.".to_string(),
            },
            PassgateError::Hashing(_)
            | PassgateError::Database(_)
            | PassgateError::Task(_)
            | PassgateError::Config(_)
            | PassgateError::Io(_) => ApiErrorBody {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred.".to_string(),
            },
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: PassgateError) -> (StatusCode, String) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_render_identically() {
        let not_found = body_of(PassgateError::UserNotFound).await;
        let unauthorized = body_of(PassgateError::Unauthorized).await;
        assert_eq!(not_found, unauthorized);
        assert_eq!(not_found.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn storage_failures_hide_details() {
        let (status, body) = body_of(PassgateError::Database(SqlxError::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains(r#""code":"INTERNAL_ERROR""#));
        assert!(!body.contains("pool"));
    }

    #[test]
    fn decode_maps_to_bad_request() {
        let err = PassgateError::Decode("expected value".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(PassgateError::UsernameTaken.status(), StatusCode::CONFLICT);
    }
}
