use axum::http::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::config::RelayConfig;
use crate::error::Error;
use crate::payload::AudioPayload;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "whisper-1";
pub const NO_TRANSCRIPTION: &str = "No transcription found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
}

impl TranscriptionResult {
    pub fn from_response(body: &Value) -> Self {
        let text = body
            .get("text")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_TRANSCRIPTION);

        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum RelayOutcome {
    Transcribed(TranscriptionResult),
    /// The endpoint answered with a non-success status; `body` is its JSON error.
    Rejected { status: StatusCode, body: Value },
}

#[derive(Clone)]
pub struct TranscriptionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl TranscriptionClient {
    pub fn new(config: &RelayConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/audio/transcriptions", self.api_base)
    }

    pub async fn transcribe(&self, payload: AudioPayload) -> Result<RelayOutcome, Error> {
        let size_bytes = payload.len();
        let file_part = Part::bytes(Vec::from(payload.bytes))
            .file_name(payload.file_name)
            .mime_str(&payload.content_type)?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone());

        tracing::info!(
            model = %self.model,
            size_bytes = size_bytes,
            "transcription_request_sent"
        );

        let response = self
            .http
            .post(self.url())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "transcription_api_error");
            return Ok(RelayOutcome::Rejected { status, body });
        }

        let result = TranscriptionResult::from_response(&body);
        tracing::info!(chars = result.text.len(), "transcription_received");

        Ok(RelayOutcome::Transcribed(result))
    }
}
