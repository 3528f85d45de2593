//! User record, identifier token, and the identifier scheme.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT NOT NULL DEFAULT gen_random_uuid()::text,
        name VARCHAR(20) NOT NULL,
        email VARCHAR(254) NOT NULL,
        CONSTRAINT users_pkey PRIMARY KEY (id),
        CONSTRAINT users_name_key UNIQUE (name)
    )
"#;

/// Opaque user identifier. Issued by the store or by an external identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(String);

impl UserId {
    /// Trimmed, non-empty token; `None` otherwise.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(UserId(trimmed.to_string()))
        }
    }

    /// Path segment taken as it is; only the empty segment is rejected.
    pub fn from_path(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(UserId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where new identifiers come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdScheme {
    /// Storage engine assigns the id on insert.
    #[default]
    Generated,
    /// Caller supplies `uid` on create (issued by an identity provider).
    External,
}

impl IdScheme {
    /// JSON key carrying the identifier in responses.
    pub fn response_key(self) -> &'static str {
        match self {
            IdScheme::Generated => "id",
            IdScheme::External => "uid",
        }
    }
}

impl std::str::FromStr for IdScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generated" => Ok(IdScheme::Generated),
            "external" => Ok(IdScheme::External),
            _ => Err(ConfigError::invalid(
                "USER_ID_SCHEME",
                s,
                "expected generated or external",
            )),
        }
    }
}

/// Persisted user row.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Insert shape. `id: None` lets the store generate one.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

/// Fields overwritten by an update; the id never changes.
#[derive(Clone, Debug)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
}
