use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index::handler,
        crate::routes::transcribe::handler,
    ),
    tags((name = "transcribe", description = "Audio transcription relay"))
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
