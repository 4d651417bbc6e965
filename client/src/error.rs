//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers treat
//! them differently from an arbitrary failed status: one means the resource
//! is gone, the other carries user-correctable messages. Everything else
//! lands in `Http` with the raw status and body, or in the transport/codec
//! variants.

use std::fmt;

use serde::Deserialize;

/// Errors produced while building, executing, or parsing an API call.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    NotFound,

    /// The server returned 422 with a list of validation messages.
    Validation(Vec<String>),

    /// The server returned a non-2xx status other than 404/422.
    Http { status: u16, body: String },

    /// The request never completed (connection refused, timeout, DNS).
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Validation(errors) => {
                write!(f, "validation failed: {}", errors.join(", "))
            }
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// JSON-API style error body: `{"errors": [{"detail": "..."}]}`.
#[derive(Deserialize)]
struct StructuredErrors {
    errors: Vec<StructuredError>,
}

#[derive(Deserialize)]
struct StructuredError {
    detail: String,
}

/// Flat validation body emitted by the server: `{"errors": ["..."]}`.
#[derive(Deserialize)]
struct FlatErrors {
    errors: Vec<String>,
}

/// Extract the validation messages from a 422 body, if it has the expected
/// shape and at least one message.
pub(crate) fn validation_messages(body: &str) -> Option<Vec<String>> {
    let parsed: FlatErrors = serde_json::from_str(body).ok()?;
    if parsed.errors.is_empty() {
        return None;
    }
    Some(parsed.errors)
}

/// Best-effort human message from a failed response body. A structured
/// JSON-API body wins (first error's `detail`), then the flat validation
/// shape (first string). Returns `None` for anything else.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<StructuredErrors>(body) {
        if let Some(first) = parsed.errors.into_iter().next() {
            return Some(first.detail);
        }
    }
    validation_messages(body).map(|mut errors| errors.remove(0))
}
