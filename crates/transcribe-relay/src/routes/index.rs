use axum::response::Html;

use crate::templates::UPLOAD_PAGE;

#[utoipa::path(
    get,
    path = "/",
    operation_id = "upload_form",
    responses(
        (status = 200, description = "Audio upload form", content_type = "text/html", body = String),
    ),
    tag = "transcribe",
)]
pub async fn handler() -> Html<&'static str> {
    Html(UPLOAD_PAGE)
}
