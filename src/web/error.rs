//! API error handling for the sharebin Web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request.
    BadRequest,
    /// No record with the given id.
    NotFound,
    /// Password mismatch.
    InvalidPassword,
    /// Upload beyond the configured maximum.
    SizeExceeded,
    /// Invalid input.
    ValidationError,
    /// Unexpected internal failure.
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    ///
    /// Every failure kind answers with HTTP 400; clients tell failures
    /// apart by the code in the response body, not the status line.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create an invalid password error.
    pub fn invalid_password(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPassword, message)
    }

    /// Create a size exceeded error.
    pub fn size_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SizeExceeded, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<crate::SharebinError> for ApiError {
    fn from(err: crate::SharebinError) -> Self {
        match &err {
            crate::SharebinError::NotFound(_) => ApiError::not_found(err.to_string()),
            crate::SharebinError::InvalidPassword => ApiError::invalid_password(err.to_string()),
            crate::SharebinError::SizeExceeded { .. } => ApiError::size_exceeded(err.to_string()),
            crate::SharebinError::Validation(msg) => ApiError::validation(msg.clone()),
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SharebinError;

    #[test]
    fn test_every_code_answers_400() {
        for code in [
            ErrorCode::BadRequest,
            ErrorCode::NotFound,
            ErrorCode::InvalidPassword,
            ErrorCode::SizeExceeded,
            ErrorCode::ValidationError,
            ErrorCode::InternalError,
        ] {
            assert_eq!(code.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidPassword).unwrap();
        assert_eq!(json, "\"INVALID_PASSWORD\"");

        let json = serde_json::to_string(&ErrorCode::SizeExceeded).unwrap();
        assert_eq!(json, "\"SIZE_EXCEEDED\"");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: ErrorCode::NotFound,
                message: "file with id 3 not found".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "file with id 3 not found");
    }

    #[test]
    fn test_from_service_errors() {
        let err: ApiError = SharebinError::NotFound("file with id 1".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = SharebinError::InvalidPassword.into();
        assert_eq!(err.code, ErrorCode::InvalidPassword);

        let err: ApiError = SharebinError::SizeExceeded { limit_mb: 10 }.into();
        assert_eq!(err.code, ErrorCode::SizeExceeded);

        let err: ApiError = SharebinError::Validation("bad name".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err: ApiError = SharebinError::Database("boom".to_string()).into();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
