//! Cross-field checks on loaded settings.

use crate::config::types::{Settings, StorageKind};
use crate::error::ConfigError;
use std::net::SocketAddr;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.bind_addr.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::invalid(
            "BIND_ADDR",
            &settings.bind_addr,
            "expected host:port",
        ));
    }
    if settings.max_connections == 0 {
        return Err(ConfigError::Validation(
            "DB_MAX_CONNECTIONS must be at least 1".into(),
        ));
    }
    if settings.max_body_bytes == 0 {
        return Err(ConfigError::Validation("MAX_BODY_BYTES must be at least 1".into()));
    }
    if settings.storage == StorageKind::Postgres
        && !(settings.database_url.starts_with("postgres://")
            || settings.database_url.starts_with("postgresql://"))
    {
        return Err(ConfigError::Validation(
            "DATABASE_URL must be a postgres:// URL".into(),
        ));
    }
    Ok(())
}
