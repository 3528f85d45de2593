//! Field rules applied to request bodies before they reach the service.

use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

/// Shape checks beyond length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
    /// No whitespace or control characters anywhere.
    Token,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
}

pub const NAME_RULE: ValidationRule = ValidationRule {
    min_length: Some(1),
    max_length: Some(20),
    format: Some(Format::Token),
};

pub const EMAIL_RULE: ValidationRule = ValidationRule {
    min_length: Some(3),
    max_length: Some(254),
    format: Some(Format::Email),
};

pub const UID_RULE: ValidationRule = ValidationRule {
    min_length: Some(1),
    max_length: Some(128),
    format: Some(Format::Token),
};

/// Implemented by request schemas; returns the normalized value or a 400-class error.
pub trait Validate: Sized {
    fn validated(self) -> Result<Self, AppError>;
}

/// Trim `value` and check it against `rule`. Lengths count characters, not bytes.
pub fn normalize_field(col: &str, value: String, rule: &ValidationRule) -> Result<String, AppError> {
    let value = value.trim().to_string();
    validate_field(col, &value, rule)?;
    Ok(value)
}

pub fn validate_field(col: &str, v: &str, rule: &ValidationRule) -> Result<(), AppError> {
    let len = v.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return Err(if min == 1 {
                AppError::Validation(format!("{} must not be empty", col))
            } else {
                AppError::Validation(format!("{} must be at least {} characters", col, min))
            });
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col, max
            )));
        }
    }
    if let Some(format) = rule.format {
        validate_format(col, v, format)?;
    }
    Ok(())
}

fn validate_format(col: &str, v: &str, format: Format) -> Result<(), AppError> {
    match format {
        Format::Email => {
            if !compiled(&EMAIL, EMAIL_PATTERN, col)?.is_match(v) {
                return Err(AppError::Validation(format!("{} must be a valid email", col)));
            }
        }
        Format::Token => {
            if v.chars().any(char::is_control) {
                return Err(AppError::Validation(format!(
                    "{} must not contain control characters",
                    col
                )));
            }
            if !compiled(&TOKEN, TOKEN_PATTERN, col)?.is_match(v) {
                return Err(AppError::Validation(format!(
                    "{} must not contain whitespace",
                    col
                )));
            }
        }
    }
    Ok(())
}

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";
const TOKEN_PATTERN: &str = r"^\S+$";

static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
static TOKEN: OnceLock<Option<Regex>> = OnceLock::new();

fn compiled(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &str,
    col: &str,
) -> Result<&'static Regex, AppError> {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .ok_or_else(|| AppError::Validation(format!("invalid pattern for {}", col)))
}
