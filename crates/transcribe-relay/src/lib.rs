mod client;
mod config;
mod env;
mod error;
mod openapi;
mod payload;
mod routes;
mod templates;

pub use client::{
    DEFAULT_API_BASE, DEFAULT_MODEL, NO_TRANSCRIPTION, RelayOutcome, TranscriptionClient,
    TranscriptionResult,
};
pub use config::{DEFAULT_CONNECT_TIMEOUT_MS, RelayConfig};
pub use env::Env;
pub use error::Error;
pub use openapi::openapi;
pub use payload::{AUDIO_FIELD, AudioPayload, DEFAULT_FILE_NAME, DEFAULT_MIME_TYPE};
pub use routes::router;
pub use templates::{ResultPage, UPLOAD_PAGE};
