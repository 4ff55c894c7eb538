use crate::error::ServerError;
use lambda_http::tracing::Level;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = raw.trim().parse::<Level>().map_err(|_| {
                ServerError::Configuration(format!("invalid {LOG_LEVEL_VAR} value {raw:?}"))
            })?;
        }
        Ok(config)
    }
}
