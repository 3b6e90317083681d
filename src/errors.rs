use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The accumulated model output could not be turned into the target
    /// artifact. `raw` keeps the full text for diagnostics.
    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String, raw: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn malformed(message: impl Into<String>, raw: impl Into<String>) -> Self {
        AppError::MalformedPayload {
            message: message.into(),
            raw: raw.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotConfigured(_) => "NOT_CONFIGURED",
            AppError::TransportFailure(_) => "TRANSPORT_FAILURE",
            AppError::MalformedPayload { .. } => "MALFORMED_PAYLOAD",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::StorageError(_) => "STORAGE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Raw model output attached to the error, if any.
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            AppError::MalformedPayload { raw, .. } => Some(raw.as_str()),
            _ => None,
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
            raw: self.raw_payload().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::TransportFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedPayload { .. } => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response_body())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::TransportFailure(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotConfigured("key".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::TransportFailure("reset".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("objective 9.9".into());
        assert_eq!(err.to_string(), "Not found: objective 9.9");
    }

    #[test]
    fn test_malformed_payload_keeps_raw_text() {
        let err = AppError::malformed("expected value at line 1", "not json at all");
        let body = err.to_response_body();

        assert_eq!(body.kind, "MALFORMED_PAYLOAD");
        assert_eq!(body.raw.as_deref(), Some("not json at all"));
        assert_eq!(err.raw_payload(), Some("not json at all"));
    }

    #[test]
    fn test_not_configured_is_distinct_from_transport_failure() {
        let missing = AppError::NotConfigured("no key".into());
        let broken = AppError::TransportFailure("connection reset".into());

        assert_ne!(missing.error_code(), broken.error_code());
        assert!(missing.raw_payload().is_none());
    }
}
