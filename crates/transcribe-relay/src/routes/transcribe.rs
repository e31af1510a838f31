use askama::Template;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};

use super::AppState;
use crate::client::RelayOutcome;
use crate::error::Error;
use crate::payload::AudioPayload;
use crate::templates::ResultPage;

#[utoipa::path(
    post,
    path = "/",
    operation_id = "transcribe",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "Multipart form with an `audio` file field. Any other content type is read as raw audio bytes.",
    ),
    responses(
        (status = 200, description = "Rendered transcription page", content_type = "text/html", body = String),
        (status = 500, description = "Upstream JSON error or plain-text processing error"),
    ),
    tag = "transcribe",
)]
pub async fn handler(State(state): State<AppState>, request: Request) -> Result<Response, Error> {
    let payload = AudioPayload::from_request(request).await?;

    tracing::info!(
        file_name = %payload.file_name,
        content_type = %payload.content_type,
        size_bytes = payload.len(),
        "audio_payload_parsed"
    );

    match state.client.transcribe(payload).await? {
        RelayOutcome::Transcribed(result) => {
            let page = ResultPage::new(&result.text).render()?;
            Ok(Html(page).into_response())
        }
        RelayOutcome::Rejected { body, .. } => {
            let body = serde_json::to_string_pretty(&body)?;
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response())
        }
    }
}
