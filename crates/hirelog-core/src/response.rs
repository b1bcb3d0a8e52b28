//! Uniform success envelope: `{status, message, data?}`.
//!
//! Error bodies are produced by each service's error type; this module only
//! covers the success path so every 2xx body has the same shape.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// JSON body wrapper carrying the numeric HTTP status, a human-readable
/// message, and an optional payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Build a `200 OK` envelope response.
pub fn ok<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    with_status(StatusCode::OK, message, Some(data))
}

/// Build a `201 Created` envelope response.
pub fn created<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    with_status(StatusCode::CREATED, message, Some(data))
}

/// Build an envelope response with an arbitrary status and optional payload.
pub fn with_status<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: Option<T>,
) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            status: status.as_u16(),
            message: message.to_owned(),
            data,
        }),
    )
}
