pub(crate) mod index;
pub(crate) mod transcribe;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::client::TranscriptionClient;
use crate::config::RelayConfig;
use crate::error::Error;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: TranscriptionClient,
}

pub fn router(config: RelayConfig) -> Result<Router, Error> {
    let state = AppState {
        client: TranscriptionClient::new(&config)?,
    };

    let body_limit = match config.body_limit {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    let router = Router::new()
        .route(
            "/",
            get(index::handler)
                .post(transcribe::handler)
                .fallback(method_not_allowed),
        )
        .layer(body_limit)
        .with_state(state);

    Ok(router)
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
