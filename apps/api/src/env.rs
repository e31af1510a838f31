use hypr_api_env::ServerEnv;

pub struct Env {
    pub server: ServerEnv,
    pub relay: hypr_transcribe_relay::Env,
}

impl Env {
    pub fn load() -> Result<Self, envy::Error> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: envy::from_env()?,
            relay: envy::from_env()?,
        })
    }
}
