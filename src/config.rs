use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid value for {name}: {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub calendar_ids: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let calendar_ids: Vec<String> = env::var("CALENDAR_IDS")
            .unwrap_or_else(|_| "employee,admin".to_string())
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            port: parse_var("PORT", 8080)?,
            backend_url: env::var("ATTENDANCE_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            backend_timeout: Duration::from_millis(parse_var("ATTENDANCE_TIMEOUT_MS", 5000)?),
            calendar_ids,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError { name, value }),
        Err(_) => Ok(default),
    }
}
