use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    MissingConfig(&'static str),

    #[error("Missing '{0}' file in form data.")]
    MissingField(&'static str),

    #[error("invalid multipart request: {0}")]
    MultipartRejection(#[from] MultipartRejection),

    #[error("failed to read multipart field: {0}")]
    Multipart(#[from] MultipartError),

    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("transcription request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        tracing::error!(error = %msg, "route_error_internal");
        sentry::capture_message(&msg, sentry::Level::Error);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error processing request: {msg}"),
        )
            .into_response()
    }
}
