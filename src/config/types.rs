//! Runtime settings resolved from the environment.

use crate::error::ConfigError;
use crate::model::IdScheme;
use axum::http::HeaderValue;

/// Backing store for users.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageKind {
    #[default]
    Postgres,
    /// Process-local map; contents are lost on restart.
    Memory,
}

impl std::str::FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageKind::Postgres),
            "memory" => Ok(StorageKind::Memory),
            _ => Err(ConfigError::invalid("STORAGE", s, "expected postgres or memory")),
        }
    }
}

/// Whether `update` re-checks name uniqueness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateNamePolicy {
    /// No pre-check; a storage-level collision is an unhandled storage fault.
    #[default]
    Unchecked,
    /// Reject renames onto another user's name with the duplicate-name error.
    Enforce,
}

impl std::str::FromStr for UpdateNamePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unchecked" => Ok(UpdateNamePolicy::Unchecked),
            "enforce" => Ok(UpdateNamePolicy::Enforce),
            _ => Err(ConfigError::invalid(
                "UPDATE_NAME_POLICY",
                s,
                "expected unchecked or enforce",
            )),
        }
    }
}

/// Cross-origin policy applied to every route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

impl std::str::FromStr for CorsOrigins {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "*" {
            return Ok(CorsOrigins::Any);
        }
        let mut origins = Vec::new();
        for origin in s.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            let value = HeaderValue::from_str(origin)
                .map_err(|e| ConfigError::invalid("CORS_ALLOWED_ORIGINS", origin, e.to_string()))?;
            origins.push(value);
        }
        Ok(CorsOrigins::List(origins))
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub storage: StorageKind,
    pub bind_addr: String,
    pub max_connections: u32,
    pub id_scheme: IdScheme,
    pub update_name_policy: UpdateNamePolicy,
    pub cors_origins: CorsOrigins,
    pub max_body_bytes: usize,
}

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/voyagen";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            storage: StorageKind::default(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            id_scheme: IdScheme::default(),
            update_name_policy: UpdateNamePolicy::default(),
            cors_origins: CorsOrigins::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
