//! Uniform response envelope for API calls.
//!
//! # Design
//! Every `TodoApi` call returns an `ApiResponse<T>` instead of a `Result`,
//! so presentation code branches on the presence of `data` and reads
//! `message` for display or logging. The `code` mirrors the HTTP status when
//! one was observed and defaults to 500 when the request never completed.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Wrapper normalizing success and failure paths for callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(code: u16, data: T) -> Self {
        Self {
            code,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

impl ApiError {
    /// Envelope code for this error: the HTTP status when one was observed,
    /// else 500.
    fn envelope_code(&self) -> u16 {
        match self {
            ApiError::NotFound => 404,
            ApiError::Validation(_) => 422,
            ApiError::Http { status, .. } => *status,
            ApiError::Transport(_) | ApiError::Deserialization(_) | ApiError::Serialization(_) => {
                500
            }
        }
    }

    /// Message shown to callers. Validation messages and structured error
    /// details pass through; everything else collapses to a generic string.
    fn envelope_message(&self) -> String {
        match self {
            ApiError::NotFound => "resource not found".to_string(),
            ApiError::Validation(errors) => errors
                .first()
                .cloned()
                .unwrap_or_else(|| "Request failed".to_string()),
            ApiError::Http { body, .. } => {
                crate::error::message_from_body(body).unwrap_or_else(|| "Request failed".to_string())
            }
            ApiError::Transport(_) => "Request failed".to_string(),
            ApiError::Deserialization(_) | ApiError::Serialization(_) => {
                "Unexpected error".to_string()
            }
        }
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    fn from(err: ApiError) -> Self {
        ApiResponse::failure(err.envelope_code(), err.envelope_message())
    }
}
