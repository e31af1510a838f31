use hypr_api_env::{OpenAiEnv, filter_empty, string_to_u64};
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct Env {
    #[serde(flatten)]
    pub openai: OpenAiEnv,
    #[serde(default, deserialize_with = "filter_empty")]
    pub transcription_model: Option<String>,
    #[serde(default, deserialize_with = "string_to_u64")]
    pub max_upload_bytes: Option<u64>,
}
