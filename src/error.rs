use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MusegenError {
    #[error("{0}")]
    ConfigError(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Gateway returned {status}: {details}")]
    UpstreamError { status: u16, details: String },
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, MusegenError>;

impl actix_web::ResponseError for MusegenError {
    fn status_code(&self) -> StatusCode {
        match self {
            MusegenError::ValidationError(_) => StatusCode::BAD_REQUEST,
            MusegenError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            MusegenError::ConfigError(msg) | MusegenError::ValidationError(msg) => {
                json!({ "error": msg })
            }
            MusegenError::UpstreamError { details, .. } => {
                json!({ "error": "Failed to generate prompt", "details": details })
            }
            other => json!({ "error": "Internal server error", "message": other.to_string() }),
        };

        // Error responses bypass the default-header middleware, so the CORS
        // header is attached here as well.
        HttpResponse::build(self.status_code())
            .insert_header(("Access-Control-Allow-Origin", "*"))
            .json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn validation_errors_map_to_400() {
        let err = MusegenError::ValidationError("Prompt is required".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_errors_propagate_their_status() {
        let err = MusegenError::UpstreamError {
            status: 429,
            details: "rate limited".into(),
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn unknown_upstream_status_falls_back_to_502() {
        let err = MusegenError::UpstreamError {
            status: 0,
            details: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn config_errors_map_to_500() {
        let err = MusegenError::ConfigError("Gateway API key not configured".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
