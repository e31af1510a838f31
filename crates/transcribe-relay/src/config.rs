use std::time::Duration;

use crate::client::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::env::Env;
use crate::error::Error;

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 7 * 1000;

#[derive(Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub connect_timeout: Duration,
    /// Maximum accepted request body in bytes. `None` disables the limit.
    pub body_limit: Option<usize>,
}

impl RelayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            body_limit: None,
        }
    }

    pub fn from_env(env: &Env) -> Result<Self, Error> {
        let api_key = env
            .openai
            .openai_api_key
            .clone()
            .ok_or(Error::MissingConfig("OPENAI_API_KEY not configured"))?;

        let mut config = Self::new(api_key);
        if let Some(api_base) = &env.openai.openai_api_base {
            config = config.with_api_base(api_base);
        }
        if let Some(model) = &env.transcription_model {
            config = config.with_model(model);
        }
        if let Some(limit) = env.max_upload_bytes {
            config = config.with_body_limit(limit as usize);
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = Some(limit);
        self
    }
}
