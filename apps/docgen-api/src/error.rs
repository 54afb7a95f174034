//! Error types for the document generator API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use docgen_core::TemplateError;
use render_engine::RenderError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("PDF rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Missing or invalid identity")]
    Unauthorized,

    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(name) => ApiError::TemplateNotFound(name),
            TemplateError::Io(e) => ApiError::Internal(e.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::TemplateNotFound(name) => {
                (StatusCode::NOT_FOUND, format!("Template not found: {}", name))
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Render(e) => {
                // Malformed input HTML will not succeed on retry, so the
                // underlying message goes to the caller for diagnosis.
                tracing::error!("Render error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("PDF rendering failed: {}", e),
                )
            }
            ApiError::DocumentNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Document not found: {}", id))
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid identity".to_string(),
            ),
            ApiError::Persistence(e) => {
                tracing::error!("Persistence error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Persistence error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
