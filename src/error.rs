//! Typed errors and HTTP mapping.

use crate::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("validation: {0}")]
    Validation(String),
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Column guarded by a storage-level unique constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniqueField {
    Id,
    Name,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Id => f.write_str("id"),
            UniqueField::Name => f.write_str("name"),
        }
    }
}

/// Failures reported by a [`crate::store::UserStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: UniqueField },
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Constraint names used by the users table DDL.
pub(crate) const USERS_PKEY: &str = "users_pkey";
pub(crate) const USERS_NAME_KEY: &str = "users_name_key";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                match db.constraint() {
                    Some(USERS_NAME_KEY) => {
                        return StoreError::UniqueViolation {
                            field: UniqueField::Name,
                        }
                    }
                    Some(USERS_PKEY) => {
                        return StoreError::UniqueViolation {
                            field: UniqueField::Id,
                        }
                    }
                    _ => {}
                }
            }
        }
        StoreError::Db(err)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("User not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("Username already exists")]
    DuplicateName,
    #[error("User id already exists")]
    DuplicateId,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::DuplicateName | AppError::DuplicateId => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Config(_) | AppError::Store(_) | AppError::Db(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
