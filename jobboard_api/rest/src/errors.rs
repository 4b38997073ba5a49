use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Every response body is wrapped in this envelope.
#[derive(Serialize)]
pub struct ApiEnvelope<'a, T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn success(code: StatusCode, message: Option<&str>, data: impl Serialize) -> Response {
    let body = ApiEnvelope {
        success: true,
        message,
        data: Some(data),
    };
    (code, Json(body)).into_response()
}

pub fn failure(code: StatusCode, message: &str) -> Response {
    let body = ApiEnvelope::<()> {
        success: false,
        message: Some(message),
        data: None,
    };
    (code, Json(body)).into_response()
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("Internal server error: {err:#}");
    failure(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}
