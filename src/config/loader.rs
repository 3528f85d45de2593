//! Load settings from environment variables (after `.env` has been applied by the caller).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(url) = get("DATABASE_URL") {
            settings.database_url = url;
        }
        if let Some(addr) = get("BIND_ADDR") {
            settings.bind_addr = addr.trim().to_string();
        }
        if let Some(v) = get("STORAGE") {
            settings.storage = v.parse()?;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            settings.max_connections = parse_number("DB_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("USER_ID_SCHEME") {
            settings.id_scheme = v.parse()?;
        }
        if let Some(v) = get("UPDATE_NAME_POLICY") {
            settings.update_name_policy = v.parse()?;
        }
        if let Some(v) = get("CORS_ALLOWED_ORIGINS") {
            settings.cors_origins = v.parse()?;
        }
        if let Some(v) = get("MAX_BODY_BYTES") {
            settings.max_body_bytes = parse_number("MAX_BODY_BYTES", &v)?;
        }

        validate(&settings)?;
        Ok(settings)
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, raw, e.to_string()))
}
