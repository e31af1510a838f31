use serde::Deserialize;

pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

pub fn string_to_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.filter(|s| !s.is_empty()) {
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct OpenAiEnv {
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_api_key: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_api_base: Option<String>,
}

fn default_port() -> u16 {
    8787
}

#[derive(Clone, Deserialize)]
pub struct ServerEnv {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, deserialize_with = "filter_empty")]
    pub sentry_dsn: Option<String>,
}
