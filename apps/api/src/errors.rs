#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Job profile not found: {0}")]
    ProfileNotFound(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(name) => AppError::UnsupportedFormat(name),
            other => AppError::Extraction(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(name) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("Unsupported file format: {name}. Expected .pdf, .docx, or .txt"),
            ),
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    "Could not extract text from the uploaded file".to_string(),
                )
            }
            AppError::ProfileNotFound(key) => (
                StatusCode::NOT_FOUND,
                "PROFILE_NOT_FOUND",
                format!("Job profile '{key}' is not a known preset"),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The assistant is temporarily unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_maps_to_unsupported_variant() {
        let err = AppError::from(ExtractError::UnsupportedFormat("notes.rtf".to_string()));
        assert!(matches!(err, AppError::UnsupportedFormat(name) if name == "notes.rtf"));
    }

    #[test]
    fn test_parse_failure_maps_to_extraction_variant() {
        let err = AppError::from(ExtractError::Pdf("bad xref table".to_string()));
        match err {
            AppError::Extraction(msg) => assert!(msg.contains("bad xref table")),
            other => panic!("expected Extraction, got {other:?}"),
        }
    }
}
